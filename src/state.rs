use crate::config::Config;
use crate::env::{EnvResolver, ProcessEnv};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub env: Arc<dyn EnvResolver>,
    pub config: Arc<Config>,
}

impl AppState {
    /// State backed by the real process environment.
    pub fn new(config: Config) -> Self {
        AppState {
            env: Arc::new(ProcessEnv),
            config: Arc::new(config),
        }
    }

    /// State with an injected resolver, for deterministic tests.
    #[cfg(test)]
    pub fn with_resolver(config: Config, env: impl EnvResolver + 'static) -> Self {
        AppState {
            env: Arc::new(env),
            config: Arc::new(config),
        }
    }
}
