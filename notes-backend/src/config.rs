use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "NOTES_HOST";
    pub const PORT: &str = "PORT";
    /// Number of HTTP worker threads. Unset = one per CPU core.
    pub const WORKERS: &str = "NOTES_WORKERS";
    pub const CORS_MAX_AGE_SECS: &str = "CORS_MAX_AGE_SECS";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8080;
    pub const CORS_MAX_AGE_SECS: usize = 3600;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub cors_max_age_secs: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(env_vars::HOST)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| defaults::HOST.to_string());

        let workers = parse_var::<usize>(&lookup, env_vars::WORKERS).filter(|&n| {
            if n == 0 {
                log::warn!("{} must be at least 1, using default", env_vars::WORKERS);
            }
            n > 0
        });

        Self {
            host,
            port: parse_var(&lookup, env_vars::PORT).unwrap_or(defaults::PORT),
            workers,
            cors_max_age_secs: parse_var(&lookup, env_vars::CORS_MAX_AGE_SECS)
                .unwrap_or(defaults::CORS_MAX_AGE_SECS),
        }
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// Parse a variable, warning (and yielding None) when it is set but invalid.
fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring invalid {}={:?}: {}", key, raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.host, defaults::HOST);
        assert_eq!(config.port, defaults::PORT);
        assert_eq!(config.workers, None);
        assert_eq!(config.cors_max_age_secs, defaults::CORS_MAX_AGE_SECS);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            (env_vars::HOST, "127.0.0.1"),
            (env_vars::PORT, "9000"),
            (env_vars::WORKERS, "2"),
            (env_vars::CORS_MAX_AGE_SECS, "60"),
        ]);
        assert_eq!(config.bind_addr(), ("127.0.0.1".to_string(), 9000));
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.cors_max_age_secs, 60);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            (env_vars::HOST, "  "),
            (env_vars::PORT, "not-a-port"),
            (env_vars::WORKERS, "0"),
        ]);
        assert_eq!(config.host, defaults::HOST);
        assert_eq!(config.port, defaults::PORT);
        assert_eq!(config.workers, None);
    }
}
