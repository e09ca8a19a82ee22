use crate::config::ApiConfig;
use crate::dto::{ChatHistoryResponse, ChatMessage, ChatSummary, HistoryQuery, SendMessageRequest};
use sitelink_http::client::ApiRequest;
use sitelink_http::{ApiClient, Result};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct ChatsApi {
    client: Arc<ApiClient>,
    config: Arc<ApiConfig>,
}

impl ChatsApi {
    pub fn new(client: Arc<ApiClient>, config: Arc<ApiConfig>) -> Self {
        Self { client, config }
    }

    pub async fn list_chats(&self) -> Result<Vec<ChatSummary>> {
        self.client.get(&self.config.chats()).await?.json()
    }

    /// Bulk message history, oldest first. The WebSocket manager calls this
    /// before switching to live push and again after every reconnect.
    pub async fn history(&self, chat_id: Uuid, query: &HistoryQuery) -> Result<ChatHistoryResponse> {
        let mut request = ApiRequest::get();
        if let Some(after) = query.after_seq {
            request = request.with_query("after_seq", after.to_string());
        }
        if let Some(limit) = query.limit {
            request = request.with_query("limit", limit.to_string());
        }

        self.client
            .fetch(&self.config.chat_messages(&chat_id.to_string()), request)
            .await?
            .error_for_status()?
            .json()
    }

    pub async fn send_message(
        &self,
        chat_id: Uuid,
        request: &SendMessageRequest,
    ) -> Result<ChatMessage> {
        self.client
            .post_json(&self.config.chat_messages(&chat_id.to_string()), request)
            .await?
            .json()
    }
}
