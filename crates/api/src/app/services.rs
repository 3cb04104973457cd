use anyhow::Context;
use tracing::info;

use burgerstream_infra::{seed::seed_catalog, Services};

use crate::config::ApiConfig;

/// Stores picked from the config, optionally populated with the demo
/// catalog. Postgres is used when `DATABASE_URL` is set and the `postgres`
/// feature is enabled; otherwise the stores are in-memory.
pub async fn build_services(config: &ApiConfig) -> anyhow::Result<Services> {
    let services = match config.database_url.as_deref() {
        Some(url) => build_persistent_services(url).await?,
        None => Services::in_memory(),
    };

    if config.seed {
        seed_catalog(&services).context("failed to bootstrap catalog")?;
    } else {
        info!("catalog seeding disabled");
    }
    Ok(services)
}

#[cfg(feature = "postgres")]
async fn build_persistent_services(url: &str) -> anyhow::Result<Services> {
    let pool = sqlx::PgPool::connect(url)
        .await
        .context("failed to connect to Postgres")?;
    burgerstream_infra::store::postgres::migrate(&pool)
        .await
        .context("failed to create the entity table")?;
    info!("using postgres stores");
    Ok(Services::postgres(pool))
}

#[cfg(not(feature = "postgres"))]
async fn build_persistent_services(_url: &str) -> anyhow::Result<Services> {
    tracing::warn!("DATABASE_URL is set but the postgres feature is not enabled, falling back to in-memory");
    Ok(Services::in_memory())
}
