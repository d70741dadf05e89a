//! Sequential device collector.
//!
//! This module provides the [`Collector`] executor that walks a configured
//! device list in order and, for each device:
//! - Opens an authenticated session via the [`SessionFactory`]
//! - Issues the single version-retrieval call with an optional deadline
//! - Appends the result to the device's output file
//! - Closes the session on every exit path
//!
//! Session and remote-call failures are recorded per device and never abort
//! the run; local output I/O failures do abort, since they indicate an
//! environment problem rather than a remote one.

use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{info, warn};

use crate::config::CollectorConfig;
use crate::model::{Credentials, DeviceOutcome, RunSummary, SessionFailure};
use crate::output::RecordWriter;
use crate::traits::{SessionError, SessionFactory};

// ============================================================================
// Errors
// ============================================================================

/// Errors that abort a collector run.
///
/// Per-device session failures are not represented here; they are carried
/// as [`DeviceOutcome::Failed`] entries in the [`RunSummary`].
#[derive(thiserror::Error, Debug)]
pub enum CollectError {
    /// Appending a record to the device's output file failed.
    #[error("Failed to write record for '{host}': {source}")]
    Output {
        host: String,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Collector
// ============================================================================

/// Sequential best-effort collector over a fixed device list.
///
/// Devices are processed one at a time in list order; device N+1 is not
/// contacted until device N's session has been closed. There is no
/// concurrency, no retry, and no shared state across iterations beyond the
/// read-only credentials.
///
/// # Example
///
/// ```ignore
/// use version_collector::{Collector, CollectorConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config: CollectorConfig = serde_json::from_str(&std::fs::read_to_string("run.json")?)?;
///     let collector = Collector::new(NetconfFactory::default(), config);
///     let summary = collector.run().await?;
///     println!("collected {}/{}", summary.collected, summary.attempted);
///     Ok(())
/// }
/// ```
pub struct Collector<F>
where
    F: SessionFactory,
{
    /// Session factory abstracting the management protocol
    factory: F,

    /// Run configuration (device list, credentials, output location)
    config: CollectorConfig,

    /// Append-mode writer for per-device record files
    writer: RecordWriter,

    /// Optional deadline applied to connect and to the remote call
    call_timeout: Option<Duration>,
}

impl<F> Collector<F>
where
    F: SessionFactory,
{
    /// Creates a collector from a session factory and run configuration.
    ///
    /// The per-device deadline is taken from `config.call_timeout_secs`;
    /// use [`with_timeout`](Self::with_timeout) to override it.
    pub fn new(factory: F, config: CollectorConfig) -> Self {
        let writer = RecordWriter::new(config.output_dir.clone());
        let call_timeout = config.call_timeout();
        Self {
            factory,
            config,
            writer,
            call_timeout,
        }
    }

    /// Sets the deadline applied to session establishment and to the
    /// remote call, so one unresponsive device cannot stall the run.
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.call_timeout = Some(limit);
        self
    }

    /// Executes one collection pass over the configured device list.
    ///
    /// Returns the per-device outcomes aggregated into a [`RunSummary`].
    /// A device-level failure (unreachable, auth rejected, call errored,
    /// deadline elapsed) is logged, recorded, and skipped — it never
    /// aborts the remaining devices.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Output`] if appending a record to the local
    /// output file fails. The session involved is closed before the error
    /// is returned.
    pub async fn run(&self) -> Result<RunSummary, CollectError> {
        let credentials = self.config.credentials();
        let mut summary = RunSummary::default();

        for host in &self.config.devices {
            let outcome = self.collect_device(host, &credentials).await?;
            summary.push(outcome);
        }

        info!(
            attempted = summary.attempted,
            collected = summary.collected,
            failed = summary.failed,
            "Collection run finished"
        );

        Ok(summary)
    }

    /// Runs one collection attempt against a single device.
    ///
    /// The session, once opened, is closed exactly once on every exit
    /// path: call failure, write failure, and success.
    async fn collect_device(
        &self,
        host: &str,
        credentials: &Credentials,
    ) -> Result<DeviceOutcome, CollectError> {
        let start = std::time::Instant::now();

        let mut session = match self.bounded(self.factory.connect(host, credentials)).await {
            Ok(session) => session,
            Err(e) => {
                warn!(host = %host, error = %e, "Session establishment failed, skipping device");
                return Ok(DeviceOutcome::Failed {
                    host: host.to_string(),
                    reason: SessionFailure {
                        detail: e.to_string(),
                    },
                });
            }
        };

        let fetched = self.bounded(session.fetch_version()).await;

        // Close before inspecting the result so every path below leaves the
        // session released. A close failure never changes the outcome.
        if let Err(e) = session.close().await {
            warn!(host = %host, error = %e, "Session close failed");
        }

        match fetched {
            Ok(report) => {
                let record_path =
                    self.writer
                        .append(host, &report)
                        .map_err(|source| CollectError::Output {
                            host: host.to_string(),
                            source,
                        })?;

                info!(
                    host = %host,
                    duration_ms = start.elapsed().as_millis() as u64,
                    path = %record_path.display(),
                    "Version report collected"
                );

                Ok(DeviceOutcome::Collected {
                    host: host.to_string(),
                    record_path,
                })
            }
            Err(e) => {
                warn!(host = %host, error = %e, "Remote call failed, skipping device");
                Ok(DeviceOutcome::Failed {
                    host: host.to_string(),
                    reason: SessionFailure {
                        detail: e.to_string(),
                    },
                })
            }
        }
    }

    /// Applies the configured deadline to a session operation. An elapsed
    /// deadline is reported as [`SessionError::Timeout`] and treated by
    /// callers identically to a remote-call failure.
    async fn bounded<T>(
        &self,
        operation: impl Future<Output = Result<T, SessionError>>,
    ) -> Result<T, SessionError> {
        match self.call_timeout {
            Some(limit) => match timeout(limit, operation).await {
                Ok(result) => result,
                Err(_) => Err(SessionError::Timeout(limit.as_secs())),
            },
            None => operation.await,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
