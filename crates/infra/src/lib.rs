mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{IEventRepo, Repos};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct EventlyContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl EventlyContext {
    /// Context backed by inmemory repositories. Nothing survives a restart.
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys),
        }
    }

    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let config = Config::new();
        let repos =
            Repos::create_postgres(&params.postgres_connection_string, config.pg_max_connections)
                .await?;
        Ok(Self {
            repos,
            config,
            sys: Arc::new(RealSys),
        })
    }
}

/// Will setup the infrastructure context given the environment.
///
/// Postgres is used when `DATABASE_URL` is present, otherwise the
/// inmemory repositories.
pub async fn setup_context() -> anyhow::Result<EventlyContext> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    match std::env::var(PSQL_CONNECTION_STRING) {
        Ok(postgres_connection_string) => {
            info!(
                "{} env var was provided. Going to use postgres.",
                PSQL_CONNECTION_STRING
            );
            EventlyContext::create(ContextParams {
                postgres_connection_string,
            })
            .await
        }
        Err(_) => {
            info!(
                "{} env var was not provided. Going to use inmemory infra.",
                PSQL_CONNECTION_STRING
            );
            Ok(EventlyContext::create_inmemory())
        }
    }
}
