use crate::config::ApiConfig;
use crate::dto::{NotificationResponse, StatisticsResponse};
use sitelink_http::{ApiClient, Result};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct AdminApi {
    client: Arc<ApiClient>,
    config: Arc<ApiConfig>,
}

impl AdminApi {
    pub fn new(client: Arc<ApiClient>, config: Arc<ApiConfig>) -> Self {
        Self { client, config }
    }

    pub async fn statistics(&self) -> Result<StatisticsResponse> {
        self.client.get(&self.config.statistics()).await?.json()
    }

    pub async fn notifications(&self) -> Result<Vec<NotificationResponse>> {
        self.client.get(&self.config.notifications()).await?.json()
    }

    pub async fn mark_notification_read(&self, id: Uuid) -> Result<()> {
        self.client
            .post(&self.config.notification_read(&id.to_string()))
            .await?;
        Ok(())
    }
}
