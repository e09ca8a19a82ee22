use crate::api::AdminApi;
use crate::dto::{NotificationResponse, StatisticsResponse};
use crate::repository::ApiResult;
use uuid::Uuid;

#[derive(Clone)]
pub struct AdminRepository {
    api: AdminApi,
}

impl AdminRepository {
    pub fn new(api: AdminApi) -> Self {
        Self { api }
    }

    pub async fn statistics(&self) -> ApiResult<StatisticsResponse> {
        self.api.statistics().await.into()
    }

    pub async fn notifications(&self) -> ApiResult<Vec<NotificationResponse>> {
        self.api.notifications().await.into()
    }

    pub async fn mark_notification_read(&self, id: Uuid) -> ApiResult<()> {
        self.api.mark_notification_read(id).await.into()
    }
}
