//! Run configuration for the collector.
//!
//! The device list, credentials and output location were embedded literals
//! in earlier tooling; here they are an explicit structure handed to the
//! collector at start. Loads from JSON via `serde_json`.

use crate::model::Credentials;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default output location when the configuration omits `output_dir`.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    /// Ordered host identifiers; processed strictly in this order.
    pub devices: Vec<String>,

    /// Username shared across all devices for this run.
    pub user: String,

    /// Password shared across all devices for this run.
    pub password: String,

    /// Directory receiving one append-mode file per device.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Optional per-device deadline, in seconds, applied to session
    /// establishment and to the remote call. `None` leaves both unbounded.
    #[serde(default)]
    pub call_timeout_secs: Option<u64>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl CollectorConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }

    pub fn call_timeout(&self) -> Option<Duration> {
        self.call_timeout_secs.map(Duration::from_secs)
    }
}
