use tracing::warn;

const DEFAULT_PORT: usize = 3000;
const DEFAULT_PG_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Size of the postgres connection pool. Unused with inmemory infra.
    pub pg_max_connections: u32,
}

impl Config {
    pub fn new() -> Self {
        Self {
            port: parse_env_or("PORT", DEFAULT_PORT),
            pg_max_connections: parse_env_or("PG_MAX_CONNECTIONS", DEFAULT_PG_MAX_CONNECTIONS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}
