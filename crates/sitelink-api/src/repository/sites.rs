use crate::api::SitesApi;
use crate::dto::{CameraResponse, SiteResponse};
use crate::repository::ApiResult;
use uuid::Uuid;

#[derive(Clone)]
pub struct SiteRepository {
    api: SitesApi,
}

impl SiteRepository {
    pub fn new(api: SitesApi) -> Self {
        Self { api }
    }

    pub async fn list_sites(&self) -> ApiResult<Vec<SiteResponse>> {
        self.api.list_sites().await.into()
    }

    pub async fn get_site(&self, id: Uuid) -> ApiResult<SiteResponse> {
        self.api.get_site(id).await.into()
    }

    pub async fn list_cameras(&self, site_id: Uuid) -> ApiResult<Vec<CameraResponse>> {
        self.api.list_cameras(site_id).await.into()
    }

    pub async fn get_camera(&self, site_id: Uuid, camera_id: Uuid) -> ApiResult<CameraResponse> {
        self.api.get_camera(site_id, camera_id).await.into()
    }
}
