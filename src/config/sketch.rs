use crate::sketch::SketchParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub params: SketchParams,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Rendered sketch; PNG keeps it lossless.
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<RuntimeConfig, serde_json::Error> {
    serde_json::from_str(data)
}
