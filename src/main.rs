use std::sync::Arc;

use studybot::config::AppConfig;
use studybot::history::{HistoryDbConfig, PostgresHistoryStore};
use studybot::llm::{GenerationConfig, GroqClient};
use studybot::routes::configure_routes;
use studybot::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studybot=info,warp=info".into()),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration error");
            std::process::exit(1);
        }
    };

    let db_config = match HistoryDbConfig::from_connection_string(&config.database_url) {
        Ok(db_config) => db_config,
        Err(e) => {
            tracing::error!(error = %e, "invalid DATABASE_URL");
            std::process::exit(1);
        }
    };

    let history = match PostgresHistoryStore::new(db_config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "failed to connect to history database");
            std::process::exit(1);
        }
    };

    let llm = match GroqClient::new(config.groq_api_key.clone(), config.model.clone()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to create inference client");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState {
        history: Arc::new(history),
        llm: Arc::new(llm),
        system_prompt: config.system_prompt.clone(),
        history_window: config.history_window,
        generation: GenerationConfig::new(config.max_tokens),
    });

    let routes = configure_routes(state);

    tracing::info!(
        addr = %config.bind_addr,
        model = config.model.as_str(),
        history_window = ?config.history_window,
        "starting server"
    );
    warp::serve(routes).run(config.bind_addr).await;
}
