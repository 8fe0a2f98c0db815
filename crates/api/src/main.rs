use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    zoo_observability::init();

    let database_url = std::env::var("ZOO_DATABASE_URL").unwrap_or_else(|_| {
        tracing::warn!("ZOO_DATABASE_URL not set; using ./zoo.db");
        "sqlite://zoo.db?mode=rwc".to_string()
    });
    let bind_addr =
        std::env::var("ZOO_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let store = zoo_store::ZooStore::connect(&database_url)
        .await
        .with_context(|| format!("failed to open store at {database_url}"))?;

    let app = zoo_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
