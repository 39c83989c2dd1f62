mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, MessagingConfig};
use repos::Repos;
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct PeakformContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    /// `None` when the messaging gateway credentials are missing from the
    /// environment; dispatch use cases then abort with a configuration
    /// error before touching any data.
    pub gateway: Option<Arc<dyn IMessagingGateway>>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl PeakformContext {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        let config = Config::new();
        let gateway: Option<Arc<dyn IMessagingGateway>> = match &config.messaging {
            Some(messaging) => Some(Arc::new(TwilioWhatsAppGateway::new(messaging))),
            None => None,
        };
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            gateway,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> PeakformContext {
    PeakformContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

/// Context backed by in-memory repositories and a recording messaging
/// gateway stub. Used by tests.
pub fn setup_context_inmemory() -> PeakformContext {
    PeakformContext {
        repos: Repos::create_inmemory(),
        config: Config {
            port: 5000,
            messaging: Some(MessagingConfig {
                account_sid: "AC-test".into(),
                auth_token: "secret".into(),
                sender_number: "+14155550100".into(),
            }),
        },
        sys: Arc::new(RealSys {}),
        gateway: Some(Arc::new(InMemoryMessagingGateway::new())),
    }
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
