use anyhow::Context;

use burgerstream_api::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    burgerstream_observability::init();

    let config = ApiConfig::from_env();
    let services = burgerstream_api::app::services::build_services(&config).await?;
    let app = burgerstream_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
