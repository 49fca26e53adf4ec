use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub template_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let template_dir = env::var("TEMPLATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("templates"));

        Ok(Config {
            service_port,
            service_host,
            template_dir,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Template directory: {}", self.template_dir.display());
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
            env::remove_var("TEMPLATE_DIR");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "5000");
            env::set_var("SERVICE_HOST", "127.0.0.1");
            env::set_var("TEMPLATE_DIR", "/srv/templates");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_port, 5000);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.template_dir, PathBuf::from("/srv/templates"));

        clear_env_vars();
    }

    #[test]
    fn test_config_with_defaults() {
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_port, 8000);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.template_dir, PathBuf::from("templates"));
    }

    #[test]
    fn test_invalid_port() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));

        clear_env_vars();
    }

    #[test]
    fn test_port_out_of_range() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());

        clear_env_vars();
    }
}
