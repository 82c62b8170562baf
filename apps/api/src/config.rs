use std::time::Duration;

use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 60 * 60;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Required configuration value '{0}' is not set")]
    Missing(&'static str),

    #[error("Configuration value '{key}' is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Application configuration, loaded once at startup from the environment
/// (and an optional `.env` file). A missing credential is fatal.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Refuse blank candidate responses instead of forwarding them to the model.
    pub reject_empty_responses: bool,
    pub max_upload_bytes: usize,
    /// Sessions untouched for longer than this are evicted.
    pub session_idle_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` is this
    /// over the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let reject_empty_responses = match lookup("REJECT_EMPTY_RESPONSES") {
            Some(raw) => parse_flag("REJECT_EMPTY_RESPONSES", &raw)?,
            None => false,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::Invalid {
                    key: "MAX_UPLOAD_BYTES",
                    reason: e.to_string(),
                })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let session_idle_ttl = match lookup("SESSION_IDLE_TTL_SECS") {
            Some(raw) => parse_ttl("SESSION_IDLE_TTL_SECS", &raw)?,
            None => Duration::from_secs(DEFAULT_SESSION_IDLE_TTL_SECS),
        };

        Ok(Config {
            gemini_api_key,
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            reject_empty_responses,
            max_upload_bytes,
            session_idle_ttl,
        })
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::Invalid {
            key,
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

fn parse_ttl(key: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })?;
    if secs == 0 {
        return Err(ConfigError::Invalid {
            key,
            reason: "must be at least one second".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_missing_api_key_is_named_error() {
        let err = load(&[("PORT", "9000")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("GEMINI_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let err = load(&[("GEMINI_API_KEY", "   ")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("GEMINI_API_KEY"));
    }

    #[test]
    fn test_defaults_applied() {
        let config = load(&[("GEMINI_API_KEY", "secret")]).unwrap();
        assert_eq!(config.gemini_api_key, "secret");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(!config.reject_empty_responses);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.session_idle_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_session_idle_ttl_parses() {
        let config = load(&[
            ("GEMINI_API_KEY", "secret"),
            ("SESSION_IDLE_TTL_SECS", " 90 "),
        ])
        .unwrap();
        assert_eq!(config.session_idle_ttl, Duration::from_secs(90));

        for bad in ["0", "-5", "an hour"] {
            let err = load(&[("GEMINI_API_KEY", "secret"), ("SESSION_IDLE_TTL_SECS", bad)])
                .unwrap_err();
            assert!(matches!(
                err,
                ConfigError::Invalid {
                    key: "SESSION_IDLE_TTL_SECS",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = load(&[("GEMINI_API_KEY", "secret"), ("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn test_reject_empty_responses_flag_parses() {
        let config = load(&[
            ("GEMINI_API_KEY", "secret"),
            ("REJECT_EMPTY_RESPONSES", "TRUE"),
        ])
        .unwrap();
        assert!(config.reject_empty_responses);

        let err = load(&[
            ("GEMINI_API_KEY", "secret"),
            ("REJECT_EMPTY_RESPONSES", "maybe"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "REJECT_EMPTY_RESPONSES",
                ..
            }
        ));
    }
}
