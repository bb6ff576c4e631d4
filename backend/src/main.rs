//! Service entry-point: loads configuration, selects the word table backend
//! and runs the HTTP server.

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use wordbook::domain::ports::WordTable;
use wordbook::inbound::http::health::HealthState;
use wordbook::outbound::memory::InMemoryWordTable;
use wordbook::outbound::persistence::{DbPool, DieselWordTable, PoolConfig, run_pending_migrations};
use wordbook::server::{ServerConfig, create_server};
use wordbook::settings::AppSettings;

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let search = settings.search_settings()?;
    let word_table = build_word_table(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(bind_addr, word_table).with_search_settings(search);
    let server = create_server(health_state, config).wrap_err("failed to start HTTP server")?;
    info!(%bind_addr, "word service listening");
    server.await.wrap_err("HTTP server terminated abnormally")
}

async fn build_word_table(settings: &AppSettings) -> Result<Arc<dyn WordTable>> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let Some(database_url) = settings.database_url() else {
        warn!("no database configured; words are kept in memory");
        return Ok(Arc::new(InMemoryWordTable::new(clock)));
    };

    let migration_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .wrap_err("migration task panicked")?
        .wrap_err("failed to migrate database")?;

    let pool_config =
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to build connection pool")?;
    info!("using PostgreSQL word table");
    Ok(Arc::new(DieselWordTable::new(pool, clock)))
}
