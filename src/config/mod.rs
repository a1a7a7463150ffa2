mod file_config;

pub use file_config::{FileConfig, McpConfig};

use crate::mcp::McpSettings;
use crate::server::{HttpCacheSettings, RequestsLoggingLevel, ServerConfig};
use anyhow::Result;
use clap::ValueEnum;
use std::time::Duration;

/// CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub mcp_url: Option<String>,
}

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub http_cache: HttpCacheSettings,
    pub mcp: McpSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file
    /// config. TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let defaults = HttpCacheSettings::default();
        let http_cache = HttpCacheSettings {
            s_maxage_sec: file.cache_s_maxage_sec.unwrap_or(defaults.s_maxage_sec),
            stale_while_revalidate_sec: file
                .cache_stale_while_revalidate_sec
                .unwrap_or(defaults.stale_while_revalidate_sec),
        };

        let mcp_file = file.mcp.unwrap_or_default();
        let mcp_defaults = McpSettings::default();
        let mcp = McpSettings {
            url: mcp_file
                .url
                .or_else(|| cli.mcp_url.clone())
                .unwrap_or(mcp_defaults.url),
            call_interval: mcp_file
                .call_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(mcp_defaults.call_interval),
            request_timeout: mcp_file
                .request_timeout_sec
                .map(Duration::from_secs)
                .unwrap_or(mcp_defaults.request_timeout),
            page_size: mcp_file.page_size.unwrap_or(mcp_defaults.page_size),
        };

        Ok(AppConfig {
            port,
            logging_level,
            http_cache,
            mcp,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            http_cache: self.http_cache,
        }
    }
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
