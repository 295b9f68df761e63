//! Web server command handler.

use lectern_core::AppConfig;
use lectern_error::LecternResult;
use lectern_models::HuggingFaceClient;
use lectern_summarizer::Summarizer;
use std::sync::Arc;

/// Handle the `serve` command
pub async fn handle_serve_command(config: &AppConfig, bind: Option<String>) -> LecternResult<()> {
    let bind = bind.unwrap_or_else(|| config.bind().clone());
    tracing::info!(model = %config.model_id(), %bind, "Starting Lectern web server");

    let client = HuggingFaceClient::from_config(config);
    let summarizer = Arc::new(Summarizer::new(client, config));
    let router = lectern_server::create_router(summarizer);

    let listener = lectern_server::bind(&bind).await?;
    lectern_server::serve(listener, router).await?;

    Ok(())
}
