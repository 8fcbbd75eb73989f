mod actions;
mod config;
mod db;
mod entities;
mod error;
mod logger;
mod models;
mod repositories;
mod routes;

use std::sync::Arc;

use crate::{
    actions::Actions,
    config::Config,
    logger::TracingLogger,
    repositories::{SeaOrmFavoriteSeriesRepository, SeaOrmIgnoredSeriesRepository},
};

pub struct AppState {
    pub config: Arc<Config>,
    pub actions: Arc<Actions>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,series_matcher=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(config.database_url.as_str()).await?;

    let actions = Actions::new(
        Arc::new(SeaOrmFavoriteSeriesRepository::new(db.clone())),
        Arc::new(SeaOrmIgnoredSeriesRepository::new(db)),
        Arc::new(TracingLogger),
    );

    let state = Arc::new(AppState { config: config.clone(), actions: Arc::new(actions) });
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
