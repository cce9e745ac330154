use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use job_recommender::config::Config;
use job_recommender::llm_client;
use job_recommender::routes::build_router;
use job_recommender::state::AppState;
use job_recommender::telemetry::{init_tracing, LogOutput};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_tracing(&config.rust_log, false, LogOutput::Stdout);

    info!("Starting Job Recommendation API v{}", env!("CARGO_PKG_VERSION"));

    if !config.openai_configured() {
        warn!("OPENAI_API_KEY is not set; recommendation endpoints will return errors");
    }
    if !config.firecrawl_configured() {
        warn!("FIRECRAWL_API_KEY is not set; scraping endpoints will return errors");
    }

    let state = AppState::from_config(config.clone())?;
    info!(
        "LLM client {} (model: {}, max attempts: {})",
        if state.llm.is_some() { "initialized" } else { "disabled" },
        llm_client::MODEL,
        config.llm_max_attempts
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
