use anyhow::{Result, bail};
use clap::ValueEnum;
use std::path::PathBuf;

pub mod commands;

/// Captures analyzed when no paths are given
pub const DEFAULT_CAPTURES: [&str; 2] = ["first.har", "second.har"];
pub const DEFAULT_DOMAIN_MAP: &str = "domain_map.json";
pub const DEFAULT_COMMON_OUTPUT: &str = "common.json";

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
        }
    }
}

/// Check the capture arguments: none (use the defaults) or exactly two `.har` files.
pub fn capture_paths(files: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    match files.len() {
        0 => Ok(DEFAULT_CAPTURES.iter().map(PathBuf::from).collect()),
        2 => {
            for file in &files {
                if !file.extension().is_some_and(|ext| ext == "har") {
                    bail!("'{}' is not a .har file", file.display());
                }
            }
            Ok(files)
        }
        n => bail!("expected zero or two HAR paths, got {}", n),
    }
}
