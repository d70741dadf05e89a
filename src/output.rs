//! Append-mode record writer.
//!
//! One file per device under the configured output directory, named
//! exactly after the host identifier. Each successful collection appends
//! one record: the compact single-line JSON form of the report, followed
//! by a newline. Files are never truncated across runs.

use crate::model::VersionReport;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

pub struct RecordWriter {
    output_dir: PathBuf,
}

impl RecordWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path of the output file for `host`: the output directory joined
    /// with the untransformed host identifier.
    pub fn record_path(&self, host: &str) -> PathBuf {
        self.output_dir.join(host)
    }

    /// Appends one record for `host`, creating the output directory and
    /// the file as needed. Returns the path written to.
    ///
    /// # Errors
    ///
    /// Returns `Err` on any local I/O failure. Unlike per-device session
    /// failures, these indicate an environment problem and are surfaced
    /// to the caller rather than suppressed.
    pub fn append(&self, host: &str, report: &VersionReport) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.record_path(host);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

        // serde_json only fails on non-string map keys, which the flatten
        // representation cannot produce.
        let line = serde_json::to_string(report)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(path)
    }
}
