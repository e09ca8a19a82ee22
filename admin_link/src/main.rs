//! Headless composition entry point: wires storage, session, client, APIs,
//! repositories, and the chat manager with plain constructors.

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sitelink_api::api::{AdminApi, AuthApi, ChatsApi};
use sitelink_api::repository::{AdminRepository, ApiResult, AuthRepository};
use sitelink_api::ApiConfig;
use sitelink_chat::{ChatEvent, ChatManager};
use sitelink_http::client::{ApiClient, ClientConfig};
use sitelink_http::session::FileSessionStorage;
use sitelink_http::TokenStore;

fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never("logs", "admin_link.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "admin_link=debug,sitelink_http=debug,sitelink_api=debug,sitelink_chat=debug,info".into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = init_tracing();
    info!("Starting AdminLink");

    let server_url =
        env::var("SITELINK_SERVER_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    // Explicit composition: storage -> token store -> client -> APIs ->
    // repositories -> chat manager. No container.
    let storage = FileSessionStorage::in_data_dir("sitelink")
        .await
        .context("Failed to open session storage")?;
    let tokens = TokenStore::new(Arc::new(storage));

    let client_config = ClientConfig {
        base_url: server_url.clone(),
        ..Default::default()
    };
    let client = Arc::new(
        ApiClient::new(client_config, tokens.clone()).context("Failed to build HTTP client")?,
    );
    let api_config = Arc::new(ApiConfig::new(server_url));

    let auth = AuthRepository::new(
        AuthApi::new(client.clone(), api_config.clone()),
        tokens.clone(),
    );
    let admin = AdminRepository::new(AdminApi::new(client.clone(), api_config.clone()));
    let chat_manager = ChatManager::new(
        ChatsApi::new(client.clone(), api_config.clone()),
        tokens.clone(),
        api_config.clone(),
    );

    if !auth.is_logged_in().await {
        let email = env::var("SITELINK_EMAIL").context("SITELINK_EMAIL not set")?;
        let password = env::var("SITELINK_PASSWORD").context("SITELINK_PASSWORD not set")?;
        match auth.login(&email, &password).await {
            ApiResult::Success(user) => info!("Logged in as {} ({})", user.name, user.email),
            ApiResult::Error(message) => anyhow::bail!("Login failed: {}", message),
        }
    } else {
        info!(
            "Resuming session for {}",
            tokens.user_email().await.unwrap_or_else(|| "?".to_string())
        );
    }

    match admin.statistics().await {
        ApiResult::Success(stats) => info!(
            "Projects: {} total, {} active, {} pending approval; {} documents awaiting review",
            stats.total_projects,
            stats.active_projects,
            stats.pending_approvals,
            stats.documents_awaiting_review
        ),
        ApiResult::Error(message) => warn!("Could not load statistics: {}", message),
    }

    // Optionally tail one chat until ctrl-c.
    if let Ok(chat_id) = env::var("SITELINK_CHAT_ID") {
        let chat_id: uuid::Uuid = chat_id.parse().context("SITELINK_CHAT_ID is not a UUID")?;
        info!("Tailing chat {} (ctrl-c to stop)", chat_id);
        let handle = chat_manager.connect(chat_id);

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown requested. Cleaning up...");
                    break;
                }
                event = handle.recv() => match event {
                    Some(ChatEvent::Message { message }) => {
                        info!("[{}] {}: {}", message.sent_at, message.sender_name, message.content);
                    }
                    Some(ChatEvent::Typing { user_id, .. }) => {
                        info!("{} is typing...", user_id);
                    }
                    Some(ChatEvent::Read { user_id, last_seq, .. }) => {
                        info!("{} read up to #{}", user_id, last_seq);
                    }
                    None => {
                        error!("Chat stream ended");
                        break;
                    }
                }
            }
        }

        handle.close().await;
    }

    Ok(())
}
