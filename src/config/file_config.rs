use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub cache_s_maxage_sec: Option<usize>,
    pub cache_stale_while_revalidate_sec: Option<usize>,

    // Remote service settings
    pub mcp: Option<McpConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct McpConfig {
    pub url: Option<String>,
    pub call_interval_ms: Option<u64>,
    pub request_timeout_sec: Option<u64>,
    pub page_size: Option<u32>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
