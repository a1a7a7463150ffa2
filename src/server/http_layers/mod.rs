mod http_cache;
mod requests_logging;

pub use http_cache::{http_cache, HttpCacheSettings};
pub use requests_logging::{log_requests, RequestsLoggingLevel};
