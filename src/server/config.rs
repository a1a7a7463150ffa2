use super::{HttpCacheSettings, RequestsLoggingLevel};

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub http_cache: HttpCacheSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3001,
            http_cache: HttpCacheSettings::default(),
        }
    }
}
