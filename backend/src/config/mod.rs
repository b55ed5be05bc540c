//! Backend settings
//!
//! Later layers win: built-in defaults, then `config/<RUST_ENV>.toml` if it
//! exists, then `WLC__`-prefixed environment variables
//! (`WLC__CALCULATOR__DEFAULT_WEEK_COUNT=26`).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use weight_loss_shared::validation::validate_week_count;

/// Settings for the whole backend process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

/// Calculator defaults applied to incomplete requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Weeks projected when a request omits `week_count`
    pub default_week_count: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_week_count: 13,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                request_timeout_secs: 30,
            },
            calculator: CalculatorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Layer defaults, the per-environment file and `WLC__` variables, then validate
    pub fn load() -> Result<Self> {
        let settings_file = format!("config/{}.toml", run_env());

        let loaded: AppConfig = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&settings_file).required(false))
            .add_source(config::Environment::with_prefix("WLC").separator("__"))
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject settings the calculator could never honour
    pub fn validate(&self) -> Result<()> {
        validate_week_count(self.calculator.default_week_count)
            .map_err(|e| anyhow::anyhow!("calculator.default_week_count: {}", e.message))?;
        if self.server.request_timeout_secs == 0 {
            anyhow::bail!("server.request_timeout_secs must be greater than 0");
        }
        Ok(())
    }

    /// `RUST_ENV=production`
    pub fn is_production() -> bool {
        run_env() == "production"
    }
}

fn run_env() -> String {
    env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string())
}
