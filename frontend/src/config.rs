use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::{env, fmt, str::FromStr, time::Duration};

pub const SPORTS_API_BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json";
pub const SPORTS_API_KEY: &str = "1";
pub const AUTH_API_BASE_URL: &str = "https://dummyjson.com";
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Which sports data strategy a deployment runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SportsDataMode {
    /// Fixed sample teams and matches, no network for those two queries.
    #[default]
    Offline,
    /// Live lookups that fail with `DataUnavailable` instead of substituting samples.
    Live,
}

impl FromStr for SportsDataMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "offline" => Ok(SportsDataMode::Offline),
            "live" => Ok(SportsDataMode::Live),
            other => Err(anyhow!("Invalid SPORTS_DATA_MODE value: {}", other)),
        }
    }
}

impl fmt::Display for SportsDataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SportsDataMode::Offline => write!(f, "offline"),
            SportsDataMode::Live => write!(f, "live"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sports_api_base_url: String,
    pub sports_api_key: String,
    pub auth_api_base_url: String,
    pub http_timeout: Duration,
    pub sports_data_mode: SportsDataMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sports_api_base_url: SPORTS_API_BASE_URL.to_string(),
            sports_api_key: SPORTS_API_KEY.to_string(),
            auth_api_base_url: AUTH_API_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            sports_data_mode: SportsDataMode::default(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back
    /// to the fixed defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let sports_api_base_url =
            lookup("SPORTS_API_BASE_URL").unwrap_or(defaults.sports_api_base_url);
        let sports_api_key = lookup("SPORTS_API_KEY").unwrap_or(defaults.sports_api_key);
        let auth_api_base_url = lookup("AUTH_API_BASE_URL").unwrap_or(defaults.auth_api_base_url);

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid HTTP_TIMEOUT_SECS value: {}", raw))?;
                if secs == 0 {
                    return Err(anyhow!("HTTP_TIMEOUT_SECS must be at least 1 second"));
                }
                Duration::from_secs(secs)
            }
            None => defaults.http_timeout,
        };

        let sports_data_mode = match lookup("SPORTS_DATA_MODE") {
            Some(raw) => raw.parse()?,
            None => defaults.sports_data_mode,
        };

        Ok(Config {
            sports_api_base_url,
            sports_api_key,
            auth_api_base_url,
            http_timeout,
            sports_data_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).expect("config");
        assert_eq!(config.auth_api_base_url, "https://dummyjson.com");
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.sports_data_mode, SportsDataMode::Offline);
    }

    #[test]
    fn overrides_are_read_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("SPORTS_DATA_MODE", "Live"),
            ("HTTP_TIMEOUT_SECS", "3"),
            ("SPORTS_API_KEY", "123"),
        ]))
        .expect("config");
        assert_eq!(config.sports_data_mode, SportsDataMode::Live);
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.sports_api_key, "123");
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = Config::from_lookup(lookup_from(&[("SPORTS_DATA_MODE", "blended")]))
            .expect_err("unknown mode should fail");
        assert!(err.to_string().contains("blended"));
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        assert!(Config::from_lookup(lookup_from(&[("HTTP_TIMEOUT_SECS", "ten")])).is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = Config::from_lookup(lookup_from(&[("HTTP_TIMEOUT_SECS", "0")]))
            .expect_err("zero timeout should fail");
        assert!(err.to_string().contains("at least 1"));
    }
}
