use crate::error::{Error, Result};
use crate::transform::{ChannelPolicy, TransformParams};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file for the `fast-hough` command-line tool.
#[derive(Debug, Deserialize)]
pub struct SkewToolConfig {
    /// Transform parameters; the tool defaults to a single luma plane.
    #[serde(default = "tool_transform_defaults")]
    pub transform: TransformParams,
    /// Where to write the JSON report, if anywhere.
    #[serde(default)]
    pub report: Option<PathBuf>,
}

impl Default for SkewToolConfig {
    fn default() -> Self {
        Self {
            transform: tool_transform_defaults(),
            report: None,
        }
    }
}

fn tool_transform_defaults() -> TransformParams {
    TransformParams {
        channel_policy: ChannelPolicy::Luma,
        ..Default::default()
    }
}

pub fn load_config(path: &Path) -> Result<SkewToolConfig> {
    let data = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: format!("failed to read: {e}"),
    })?;
    serde_json::from_str(&data).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: format!("failed to parse: {e}"),
    })
}
