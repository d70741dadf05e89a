use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shared username/password pair, constant across all devices in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

/// Structured result of the remote version call: a nested mapping of
/// version/software fields as returned by the device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionReport {
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl VersionReport {
    /// Wraps a structured value; non-object values are stored under a
    /// single `"payload"` key so the record stays a mapping.
    pub fn from_value(value: serde_json::Value) -> Self {
        let fields = match value {
            serde_json::Value::Object(map) => map,
            other => {
                let mut map = serde_json::Map::new();
                map.insert("payload".to_string(), other);
                map
            }
        };
        Self { fields }
    }
}

/// Per-device result of one collection attempt.
#[derive(Debug)]
pub enum DeviceOutcome {
    /// Version report retrieved and appended to the device's output file.
    Collected { host: String, record_path: PathBuf },
    /// Session establishment or remote call failed; nothing was written.
    Failed { host: String, reason: SessionFailure },
}

impl DeviceOutcome {
    pub fn host(&self) -> &str {
        match self {
            Self::Collected { host, .. } => host,
            Self::Failed { host, .. } => host,
        }
    }

    pub fn is_collected(&self) -> bool {
        matches!(self, Self::Collected { .. })
    }
}

/// Failure reason carried on a [`DeviceOutcome::Failed`], preserving the
/// error text without keeping the source error alive.
#[derive(Debug, Clone)]
pub struct SessionFailure {
    pub detail: String,
}

impl std::fmt::Display for SessionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.detail)
    }
}

/// Aggregated result of one collector run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of devices attempted.
    pub attempted: usize,

    /// Devices whose report was written.
    pub collected: usize,

    /// Devices skipped due to a connect/call failure.
    pub failed: usize,

    /// Per-device outcomes, in device-list order.
    pub outcomes: Vec<DeviceOutcome>,
}

impl RunSummary {
    pub(crate) fn push(&mut self, outcome: DeviceOutcome) {
        self.attempted += 1;
        if outcome.is_collected() {
            self.collected += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }
}
