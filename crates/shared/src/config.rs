//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Fund ledger configuration.
    #[serde(default)]
    pub fund: FundConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Fund ledger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FundConfig {
    /// Currency code stamped on the fund record when it is first created.
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// Hard cap on history page sizes and recent-entry limits.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
    /// Number of entries returned by the recent-history view when the caller
    /// does not ask for a specific count.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u32,
    /// How many times a conflicting fund write is retried before the
    /// conflict is reported to the caller.
    #[serde(default = "default_max_update_retries")]
    pub max_update_retries: u32,
}

fn default_currency() -> String {
    "RUB".to_string()
}

fn default_max_page_size() -> u32 {
    100
}

fn default_recent_limit() -> u32 {
    5
}

fn default_max_update_retries() -> u32 {
    3
}

impl Default for FundConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            max_page_size: default_max_page_size(),
            recent_limit: default_recent_limit(),
            max_update_retries: default_max_update_retries(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Tracing filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "kompfond=debug".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("KOMPFOND").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fund_config_defaults() {
        let config = FundConfig::default();

        assert_eq!(config.default_currency, "RUB");
        assert_eq!(config.max_page_size, 100);
        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.max_update_retries, 3);
    }

    #[test]
    fn test_log_config_defaults() {
        assert_eq!(LogConfig::default().filter, "kompfond=debug");
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(["RUN_MODE", "KOMPFOND__FUND__DEFAULT_CURRENCY"], || {
            let config = AppConfig::load().expect("load defaults");

            assert_eq!(config.fund.default_currency, "RUB");
            assert_eq!(config.fund.recent_limit, 5);
        });
    }

    #[test]
    fn test_load_reads_env_overrides() {
        temp_env::with_vars(
            [
                ("KOMPFOND__FUND__DEFAULT_CURRENCY", Some("KZT")),
                ("KOMPFOND__FUND__MAX_UPDATE_RETRIES", Some("7")),
            ],
            || {
                let config = AppConfig::load().expect("load with env overrides");

                assert_eq!(config.fund.default_currency, "KZT");
                assert_eq!(config.fund.max_update_retries, 7);
            },
        );
    }
}
