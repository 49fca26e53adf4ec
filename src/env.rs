use std::env;

/// Environment variable consulted by the `/cloud` endpoint.
pub const CLOUD_NAME: &str = "CLOUD_NAME";

/// Default returned when [`CLOUD_NAME`] is unset.
pub const CLOUD_NAME_DEFAULT: &str = "unknown";

/// Read-only accessor for process-wide configuration values.
///
/// Handlers never touch `std::env` directly; they go through this trait so
/// tests can substitute a deterministic resolver. Implementations must be
/// safe to call concurrently from multiple in-flight requests.
pub trait EnvResolver: Send + Sync {
    /// Returns the value of `key`, or `default` when the variable is unset.
    fn resolve(&self, key: &str, default: &str) -> String;
}

/// Resolver backed by the real process environment.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv;

impl EnvResolver for ProcessEnv {
    fn resolve(&self, key: &str, default: &str) -> String {
        // Non-unicode values are treated the same as unset.
        env::var(key).unwrap_or_else(|_| default.to_string())
    }
}

/// Deterministic resolver backed by a fixed map, for tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MapEnv(pub std::collections::HashMap<String, String>);

#[cfg(test)]
impl MapEnv {
    pub fn with(key: &str, value: &str) -> Self {
        let mut map = std::collections::HashMap::new();
        map.insert(key.to_string(), value.to_string());
        MapEnv(map)
    }
}

#[cfg(test)]
impl EnvResolver for MapEnv {
    fn resolve(&self, key: &str, default: &str) -> String {
        self.0.get(key).cloned().unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_env_set() {
        unsafe {
            env::set_var("MULTICLOUD_WEB_RESOLVER_TEST", "aws");
        }

        let resolver = ProcessEnv;
        assert_eq!(resolver.resolve("MULTICLOUD_WEB_RESOLVER_TEST", "unknown"), "aws");

        unsafe {
            env::remove_var("MULTICLOUD_WEB_RESOLVER_TEST");
        }
    }

    #[test]
    fn test_process_env_unset_returns_default() {
        let resolver = ProcessEnv;
        assert_eq!(
            resolver.resolve("MULTICLOUD_WEB_RESOLVER_TEST_UNSET", "unknown"),
            "unknown"
        );
    }

    #[test]
    fn test_map_env() {
        let resolver = MapEnv::with(CLOUD_NAME, "gcp");
        assert_eq!(resolver.resolve(CLOUD_NAME, CLOUD_NAME_DEFAULT), "gcp");
        assert_eq!(resolver.resolve("OTHER", "fallback"), "fallback");
    }
}
