use crate::model::{Credentials, VersionReport};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to connect to device: {0}")]
    Connect(String),
    #[error("Authentication rejected: {0}")]
    Auth(String),
    #[error("Remote call failed: {0}")]
    Rpc(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Operation timed out after {0}s")]
    Timeout(u64),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// An authenticated session to one device, scoped to a single
/// collection attempt.
#[async_trait]
pub trait DeviceSession: Send {
    /// Issues the single remote call retrieving software/version
    /// information in a structured (machine-parsable) format.
    async fn fetch_version(&mut self) -> Result<VersionReport, SessionError>;

    /// Releases the session. The collector calls this exactly once per
    /// opened session, on every exit path.
    async fn close(&mut self) -> Result<(), SessionError>;
}

#[async_trait]
pub trait SessionFactory: Send + Sync {
    /// Opens an authenticated session to `host`.
    async fn connect(
        &self,
        host: &str,
        credentials: &Credentials,
    ) -> Result<Box<dyn DeviceSession>, SessionError>;
}
