//! Application configuration management
//!
//! This module handles loading and validating configuration from environment
//! variables. Library consumers typically call [`Config::from_env`] once at
//! startup and hand the result to [`Sandbox::new`](crate::sandbox::Sandbox::new).

use std::env;

use crate::constants::{DEFAULT_CC_BIN, DEFAULT_COMPILE_TIMEOUT_SECONDS, DEFAULT_PYTHON_BIN};

/// Main application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub sandbox: SandboxConfig,
    pub remote: RemoteConfig,
}

/// Sandbox execution configuration
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    /// Interpreter binary for the local interpreted path
    pub python_bin: String,
    /// C toolchain binary for the compiled path
    pub cc_bin: String,
    /// Compile deadline in seconds (distinct from the per-request run deadline)
    pub compile_timeout_secs: u64,
}

/// Remote serverless executor configuration
///
/// The remote backend is optional: when `endpoint` is unset, remote
/// executions resolve to an Internal Error result instead of failing startup.
#[derive(Debug, Clone, Default)]
pub struct RemoteConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            sandbox: SandboxConfig::from_env()?,
            remote: RemoteConfig::from_env()?,
        })
    }
}

impl SandboxConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            python_bin: env::var("SANDBOX_PYTHON_BIN")
                .unwrap_or_else(|_| DEFAULT_PYTHON_BIN.to_string()),
            cc_bin: env::var("SANDBOX_CC").unwrap_or_else(|_| DEFAULT_CC_BIN.to_string()),
            compile_timeout_secs: env::var("SANDBOX_COMPILE_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_COMPILE_TIMEOUT_SECONDS.to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("SANDBOX_COMPILE_TIMEOUT_SECONDS".to_string())
                })?,
        })
    }
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            python_bin: DEFAULT_PYTHON_BIN.to_string(),
            cc_bin: DEFAULT_CC_BIN.to_string(),
            compile_timeout_secs: DEFAULT_COMPILE_TIMEOUT_SECONDS,
        }
    }
}

impl RemoteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: env::var("REMOTE_EXECUTOR_URL").ok(),
            api_key: env::var("REMOTE_EXECUTOR_API_KEY").ok(),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
