use crate::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct ReportWriter;

impl ReportWriter {
    /// Write a report as pretty-printed JSON
    pub fn to_file<T: Serialize>(report: &T, path: &Path) -> Result<()> {
        tracing::debug!("Writing report to: {}", path.display());

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        tracing::info!("Wrote {}", path.display());

        Ok(())
    }

    /// Convert a report to a pretty-printed JSON string
    pub fn to_string<T: Serialize>(report: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Results file for a capture: the capture path with a `json` extension
pub fn results_path_for(har_path: &Path) -> PathBuf {
    har_path.with_extension("json")
}
