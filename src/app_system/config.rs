use thiserror::Error;

pub const CHANNEL_BUFFER_VAR: &str = "COMMERCE_CHANNEL_BUFFER";
pub const LOG_FILTER_VAR: &str = "COMMERCE_LOG";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings for [`CommerceSystem`](super::CommerceSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Capacity of each actor's request channel.
    pub channel_buffer: usize,
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CHANNEL_BUFFER_VAR) {
            config.channel_buffer = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidValue { key: CHANNEL_BUFFER_VAR, value }),
            };
        }
        if let Some(value) = lookup(LOG_FILTER_VAR) {
            config.log_filter = value;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(SystemConfig::from_lookup(lookup(&[])), Ok(SystemConfig::default()));
    }

    #[test]
    fn test_overrides() {
        let config = SystemConfig::from_lookup(lookup(&[
            (CHANNEL_BUFFER_VAR, " 8 "),
            (LOG_FILTER_VAR, "order_service=debug"),
        ]))
        .unwrap();
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.log_filter, "order_service=debug");
    }

    #[test]
    fn test_rejects_zero_buffer() {
        let err = SystemConfig::from_lookup(lookup(&[(CHANNEL_BUFFER_VAR, "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue { key: CHANNEL_BUFFER_VAR, value: "0".to_string() }
        );
    }
}
