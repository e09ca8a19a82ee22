use crate::config::ApiConfig;
use crate::dto::{CameraResponse, SiteResponse};
use sitelink_http::{ApiClient, Result};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct SitesApi {
    client: Arc<ApiClient>,
    config: Arc<ApiConfig>,
}

impl SitesApi {
    pub fn new(client: Arc<ApiClient>, config: Arc<ApiConfig>) -> Self {
        Self { client, config }
    }

    pub async fn list_sites(&self) -> Result<Vec<SiteResponse>> {
        self.client.get(&self.config.sites()).await?.json()
    }

    pub async fn get_site(&self, id: Uuid) -> Result<SiteResponse> {
        self.client
            .get(&self.config.site(&id.to_string()))
            .await?
            .json()
    }

    pub async fn list_cameras(&self, site_id: Uuid) -> Result<Vec<CameraResponse>> {
        self.client
            .get(&self.config.site_cameras(&site_id.to_string()))
            .await?
            .json()
    }

    pub async fn get_camera(&self, site_id: Uuid, camera_id: Uuid) -> Result<CameraResponse> {
        self.client
            .get(
                &self
                    .config
                    .site_camera(&site_id.to_string(), &camera_id.to_string()),
            )
            .await?
            .json()
    }
}
