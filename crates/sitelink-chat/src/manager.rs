//! Chat connection lifecycle.
//!
//! [`ChatManager::connect`] spawns one worker per chat view. The worker
//! replays REST history, pumps live frames from the socket, reconnects with
//! backoff after network loss, and never delivers the same message twice.
//! Dropping (or closing) the returned [`ChatHandle`] tears the socket down.

use crate::dedup::DedupWindow;
use crate::error::Result;
use crate::event::ChatEvent;
use crate::socket::{self, ChatSocket};
use futures_util::{SinkExt, StreamExt};
use sitelink_api::api::ChatsApi;
use sitelink_api::dto::{ChatMessage, HistoryQuery, SendMessageRequest};
use sitelink_api::ApiConfig;
use sitelink_http::client::{Backoff, BackoffConfig, BackoffDecision};
use sitelink_http::TokenStore;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_tungstenite::tungstenite::Message;
use uuid::Uuid;

const EVENT_BUFFER: usize = 256;
const DEDUP_WINDOW: usize = 1024;
const HISTORY_PAGE: u32 = 100;

#[derive(Clone)]
pub struct ChatManager {
    chats: ChatsApi,
    tokens: TokenStore,
    config: Arc<ApiConfig>,
    backoff: BackoffConfig,
}

impl ChatManager {
    pub fn new(chats: ChatsApi, tokens: TokenStore, config: Arc<ApiConfig>) -> Self {
        Self {
            chats,
            tokens,
            config,
            backoff: BackoffConfig::default(),
        }
    }

    /// Override the reconnect backoff (tests shrink the delays).
    #[must_use]
    pub fn with_backoff(mut self, backoff: BackoffConfig) -> Self {
        self.backoff = backoff;
        self
    }

    /// Open the live view of one chat. The connection stays up until the
    /// returned handle is closed or dropped.
    pub fn connect(&self, chat_id: Uuid) -> ChatHandle {
        let (tx, rx) = async_channel::bounded(EVENT_BUFFER);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let worker = ChatWorker {
            chat_id,
            chats: self.chats.clone(),
            tokens: self.tokens.clone(),
            config: self.config.clone(),
            backoff: Backoff::new(self.backoff.clone()),
            dedup: DedupWindow::new(DEDUP_WINDOW),
        };
        let task = tokio::spawn(worker.run(tx, shutdown_rx));

        ChatHandle {
            chat_id,
            events: rx,
            shutdown: shutdown_tx,
            task,
        }
    }

    /// Send a message through the REST API. Delivery back to this client
    /// arrives over the socket like any other message.
    pub async fn send_message(&self, chat_id: Uuid, content: &str) -> Result<ChatMessage> {
        let request = SendMessageRequest {
            content: content.to_string(),
        };
        Ok(self.chats.send_message(chat_id, &request).await?)
    }
}

/// Live subscription to one chat. Closing (or dropping) it releases the
/// socket and stops the worker.
pub struct ChatHandle {
    chat_id: Uuid,
    events: async_channel::Receiver<ChatEvent>,
    shutdown: watch::Sender<bool>,
    task: tokio::task::JoinHandle<()>,
}

impl ChatHandle {
    pub fn chat_id(&self) -> Uuid {
        self.chat_id
    }

    /// Next event, in receipt order. `None` once the worker has stopped.
    pub async fn recv(&self) -> Option<ChatEvent> {
        self.events.recv().await.ok()
    }

    /// Graceful teardown: signal the worker, wait for it to close the
    /// socket, abort if it does not wind down in time.
    pub async fn close(mut self) {
        let _ = self.shutdown.send(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), &mut self.task)
            .await
            .is_err()
        {
            self.task.abort();
        }
    }
}

impl Drop for ChatHandle {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
        self.task.abort();
    }
}

enum PumpExit {
    Shutdown,
    Disconnected,
}

struct ChatWorker {
    chat_id: Uuid,
    chats: ChatsApi,
    tokens: TokenStore,
    config: Arc<ApiConfig>,
    backoff: Backoff,
    dedup: DedupWindow,
}

impl ChatWorker {
    async fn run(
        mut self,
        tx: async_channel::Sender<ChatEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        loop {
            // History first: everything missed while offline arrives in
            // order before any live frame.
            if let Err(e) = self.replay_history(&tx).await {
                tracing::warn!("chat {} history replay failed: {}", self.chat_id, e);
            }
            if tx.is_closed() || *shutdown.borrow() {
                break;
            }

            match self.open_socket().await {
                Ok(ws) => {
                    self.backoff.reset();
                    match self.pump(ws, &tx, &mut shutdown).await {
                        PumpExit::Shutdown => break,
                        PumpExit::Disconnected => {
                            tracing::info!("chat {} socket lost, reconnecting", self.chat_id);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("chat {} connect failed: {}", self.chat_id, e);
                }
            }

            match self.backoff.next() {
                BackoffDecision::Retry(delay) => {
                    tokio::select! {
                        _ = tokio::time::sleep(delay) => {}
                        _ = shutdown.changed() => break,
                    }
                }
                BackoffDecision::GiveUp => {
                    tracing::warn!(
                        "chat {} giving up after {} reconnect attempts",
                        self.chat_id,
                        self.backoff.attempts
                    );
                    break;
                }
            }
        }
        // tx drops here; the subscriber sees the stream end.
    }

    async fn replay_history(&mut self, tx: &async_channel::Sender<ChatEvent>) -> Result<()> {
        let query = HistoryQuery {
            after_seq: self.dedup.high_seq(),
            limit: Some(HISTORY_PAGE),
        };
        let history = self.chats.history(self.chat_id, &query).await?;
        for message in history.messages {
            self.deliver(message, tx).await;
        }
        Ok(())
    }

    async fn open_socket(&self) -> Result<ChatSocket> {
        let url = self.config.chat_socket(&self.chat_id.to_string());
        let token = self.tokens.access_token().await;
        socket::connect(&url, token.as_deref()).await
    }

    async fn pump(
        &mut self,
        mut ws: ChatSocket,
        tx: &async_channel::Sender<ChatEvent>,
        shutdown: &mut watch::Receiver<bool>,
    ) -> PumpExit {
        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    let _ = ws.close(None).await;
                    return PumpExit::Shutdown;
                }
                frame = ws.next() => match frame {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(event) = ChatEvent::decode(&text) {
                            match event {
                                ChatEvent::Message { message } => {
                                    self.deliver(message, tx).await;
                                }
                                other => {
                                    if tx.send(other).await.is_err() {
                                        return PumpExit::Shutdown;
                                    }
                                }
                            }
                        }
                    }
                    Some(Ok(Message::Ping(payload))) => {
                        if let Err(e) = ws.send(Message::Pong(payload)).await {
                            tracing::debug!("pong failed: {}", e);
                            return PumpExit::Disconnected;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => return PumpExit::Disconnected,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::debug!("chat {} socket error: {}", self.chat_id, e);
                        return PumpExit::Disconnected;
                    }
                }
            }
        }
    }

    /// Push one message to the subscriber unless it was already delivered
    /// via the other path.
    async fn deliver(&mut self, message: ChatMessage, tx: &async_channel::Sender<ChatEvent>) {
        if !self.dedup.admit(message.id, message.seq) {
            tracing::trace!("chat {} dropping duplicate {}", self.chat_id, message.id);
            return;
        }
        let _ = tx.send(ChatEvent::Message { message }).await;
    }
}
