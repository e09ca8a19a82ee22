use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub active: bool,
}

/// Camera installed on a construction site. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraResponse {
    pub id: Uuid,
    pub site_id: Uuid,
    pub name: String,
    pub stream_url: String,
    pub online: bool,
}
