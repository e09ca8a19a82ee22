use crate::api::ChatsApi;
use crate::dto::{ChatMessage, ChatSummary, HistoryQuery, SendMessageRequest};
use crate::repository::ApiResult;
use uuid::Uuid;

#[derive(Clone)]
pub struct ChatRepository {
    api: ChatsApi,
}

impl ChatRepository {
    pub fn new(api: ChatsApi) -> Self {
        Self { api }
    }

    pub async fn list_chats(&self) -> ApiResult<Vec<ChatSummary>> {
        self.api.list_chats().await.into()
    }

    pub async fn history(&self, chat_id: Uuid, query: &HistoryQuery) -> ApiResult<Vec<ChatMessage>> {
        self.api
            .history(chat_id, query)
            .await
            .map(|r| r.messages)
            .into()
    }

    pub async fn send_message(&self, chat_id: Uuid, content: &str) -> ApiResult<ChatMessage> {
        let request = SendMessageRequest {
            content: content.to_string(),
        };
        self.api.send_message(chat_id, &request).await.into()
    }
}
