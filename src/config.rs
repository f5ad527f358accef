use crate::error::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let max_connections = match lookup("TRACKER_MAX_CONNECTIONS") {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => return Err(ConfigError::InvalidMaxConnections(raw)),
            },
        };

        Ok(Self {
            database_url,
            max_connections,
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
    fn requires_database_url() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingDatabaseUrl);

        let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingDatabaseUrl);
    }

    #[test]
    fn defaults_max_connections() {
        let config =
            Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/tracker")]))
                .unwrap();
        assert_eq!(config.database_url, "postgres://localhost/tracker");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn rejects_zero_or_garbage_max_connections() {
        for raw in ["0", "many", "-2"] {
            let err = Config::from_lookup(lookup_from(&[
                ("DATABASE_URL", "postgres://localhost/tracker"),
                ("TRACKER_MAX_CONNECTIONS", raw),
            ]))
            .unwrap_err();
            assert_eq!(err, ConfigError::InvalidMaxConnections(raw.to_string()));
        }
    }

    #[test]
    fn reads_max_connections_override() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/tracker"),
            ("TRACKER_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();
        assert_eq!(config.max_connections, 12);
    }
}
