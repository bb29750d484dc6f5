use study_buddy::ai::{HubModelLoader, ModelProvider};
use study_buddy::api::handler;
use study_buddy::core::config::AppConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    study_buddy::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        lambda_runtime::Error::from(e)
    })?;
    info!(model = %config.model_id, "Starting summarizer API");

    // Constructed lazily on the first request, then shared by every request
    // this execution environment serves.
    let provider = ModelProvider::new(HubModelLoader::new(config));
    let provider = &provider;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
        handler(provider, event).await
    }))
    .await
}
