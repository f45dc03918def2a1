//! Server configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::str::FromStr;

/// Default listen address. The realtime endpoint has always lived on
/// port 4000.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4000";

/// Default maximum number of recommended courses.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, one event per line.
    #[default]
    Pretty,
    /// Newline-delimited JSON.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

/// Errors raised while loading [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `LISTEN_ADDR` is not a valid socket address.
    #[error("invalid LISTEN_ADDR {value:?}: {source}")]
    InvalidListenAddr {
        /// The rejected value.
        value: String,
        /// Parser error.
        source: std::net::AddrParseError,
    },

    /// `LOG_FORMAT` is neither `pretty` nor `json`.
    #[error("invalid LOG_FORMAT {0:?}: expected \"pretty\" or \"json\"")]
    InvalidLogFormat(String),
}

/// Top-level server configuration.
///
/// Loaded once at startup via [`ServerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address serving HTTP and WebSocket traffic.
    pub listen_addr: SocketAddr,

    /// Log line format.
    pub log_format: LogFormat,

    /// Maximum number of courses returned by the recommendation endpoint.
    pub recommendation_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 4000)),
            log_format: LogFormat::Pretty,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file,
    /// then delegates to [`ServerConfig::from_lookup`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `LISTEN_ADDR` or `LOG_FORMAT` is set
    /// to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Missing keys fall back to defaults. Invalid numeric values also fall
    /// back to defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `LISTEN_ADDR` or `LOG_FORMAT` is set
    /// to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => v.parse()?,
            None => LogFormat::default(),
        };

        let recommendation_limit = parse_or(
            lookup("RECOMMENDATION_LIMIT"),
            DEFAULT_RECOMMENDATION_LIMIT,
        );

        Ok(Self {
            listen_addr,
            log_format,
            recommendation_limit,
        })
    }
}

/// Parses an optional raw value as `T`, returning `default` on missing
/// or invalid values.
fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_listen_on_port_4000() {
        let Ok(cfg) = ServerConfig::from_lookup(lookup_from(&[])) else {
            panic!("defaults must load");
        };
        assert_eq!(cfg.listen_addr.port(), 4000);
        assert_eq!(cfg.log_format, LogFormat::Pretty);
        assert_eq!(cfg.recommendation_limit, 3);
    }

    #[test]
    fn overrides_are_applied() {
        let Ok(cfg) = ServerConfig::from_lookup(lookup_from(&[
            ("LISTEN_ADDR", "127.0.0.1:9001"),
            ("LOG_FORMAT", "JSON"),
            ("RECOMMENDATION_LIMIT", "5"),
        ])) else {
            panic!("overrides must load");
        };
        assert_eq!(cfg.listen_addr.to_string(), "127.0.0.1:9001");
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert_eq!(cfg.recommendation_limit, 5);
    }

    #[test]
    fn bad_listen_addr_is_an_error() {
        let result = ServerConfig::from_lookup(lookup_from(&[("LISTEN_ADDR", "not-an-addr")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidListenAddr { .. })
        ));
    }

    #[test]
    fn bad_log_format_is_an_error() {
        let result = ServerConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")]));
        assert!(matches!(result, Err(ConfigError::InvalidLogFormat(_))));
    }

    #[test]
    fn bad_limit_falls_back_to_default() {
        let Ok(cfg) =
            ServerConfig::from_lookup(lookup_from(&[("RECOMMENDATION_LIMIT", "many")]))
        else {
            panic!("invalid limit must not fail");
        };
        assert_eq!(cfg.recommendation_limit, DEFAULT_RECOMMENDATION_LIMIT);
    }

    #[test]
    fn default_matches_default_listen_addr() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
    }
}
