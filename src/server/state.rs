use crate::dashboard::DashboardAssembler;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedAssembler = Arc<DashboardAssembler>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub assembler: GuardedAssembler,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, assembler: GuardedAssembler) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            assembler,
            hash: env!("GIT_HASH").to_string(),
        }
    }
}
