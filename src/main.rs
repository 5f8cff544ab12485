use college_chat::Application;
use college_chat::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    let settings = Settings::from_env();
    init_tracing(&settings);

    tracing::info!(
        app = %settings.app_name,
        version = %settings.app_version,
        environment = %settings.environment,
        "Starting server"
    );

    let app = Application::build(settings).await?;

    tracing::info!(
        port = app.port(),
        endpoint = "POST /api/chat",
        frontend = "/",
        try_asking = ?["What courses are offered?", "How are the placements?", "Who will win IPL?"],
        "College chatbot ready"
    );

    app.run_until_stopped().await
}

fn init_tracing(settings: &Settings) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    if settings.log_format == "json" {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    } else {
        fmt().with_env_filter(filter).with_target(true).init();
    }
}
