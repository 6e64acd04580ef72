use herald_common::config::AppConfig;
use herald_notifier::{Notifier, TelegramMessenger};
use herald_poller::client::PracticumClient;
use herald_poller::poller::StatusPoller;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "herald_poller=info,herald_notifier=info,herald_engine=info".into()
            }),
        )
        .json()
        .init();

    tracing::info!("Homework Herald starting...");

    // Load configuration; missing secrets stop startup here
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Required configuration is missing");
            return Err(e.into());
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    let client = PracticumClient::new(
        config.practicum_endpoint.clone(),
        config.practicum_token.clone(),
        config.request_timeout(),
    )?;
    let messenger = TelegramMessenger::new(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        config.request_timeout(),
    )?;
    let notifier = Notifier::new(messenger, config.telegram_chat_id.clone());

    let mut poller = StatusPoller::new(client, notifier, config.retry_time())
        .with_selection(config.selection)
        .with_cursor(config.from_date);

    // Run with graceful shutdown on Ctrl+C
    tokio::select! {
        result = poller.run() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Poller exited with error");
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("Homework Herald stopped.");
    Ok(())
}
