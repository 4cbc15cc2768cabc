use std::io::ErrorKind;
use std::str::FromStr;
use log::LevelFilter;
use serde::Deserialize;
use tokio::fs;
use crate::error::{DnsError, DnsResult};

pub const DEFAULT_CONFIG_FILE: &str = "dnsclient.toml";

#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub timeout_secs: u64,
    pub max_retries: i64,
    pub port: u16,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timeout_secs: 5,
            max_retries: 3,
            port: 53,
            log_level: "WARN".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> DnsResult<Self> {
        let config: Config = toml::from_str(text)
            .map_err(|e| DnsError::InvalidArgument(format!("Invalid configuration file: {}", e)))?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> DnsResult<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| DnsError::InvalidArgument(format!("Unknown log level \"{}\".", self.log_level)))
    }
}

/// Reads the configuration file, falling back to the defaults when it does
/// not exist.
pub async fn init_from_toml(path: &str) -> DnsResult<Config> {
    match fs::read_to_string(path).await {
        Ok(text) => Config::from_toml(&text),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}
