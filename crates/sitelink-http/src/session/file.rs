//! File-backed session storage for native targets.
//!
//! All fields live in one JSON file under the user data directory. Writes go
//! through a temp file and rename so a crash mid-write never leaves a
//! truncated session behind.

use crate::error::{ApiError, Result};
use crate::traits::SessionStorage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

pub struct FileSessionStorage {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl FileSessionStorage {
    /// Open (or create) the session file at `path`.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ApiError::Storage(e.to_string()))?;
        }

        let values = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                tracing::warn!("session file {} unreadable, starting fresh: {}", path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Open the session file in the platform data directory.
    pub async fn in_data_dir(app_name: &str) -> Result<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| ApiError::Storage("no platform data directory".to_string()))?;
        Self::open(base.join(app_name).join("session.json")).await
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, values: &HashMap<String, String>) -> Result<()> {
        let bytes =
            serde_json::to_vec_pretty(values).map_err(|e| ApiError::Storage(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)
            .await
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        self.persist(&values).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().await;
        values.remove(key);
        self.persist(&values).await
    }

    async fn clear(&self) -> Result<()> {
        let mut values = self.values.write().await;
        values.clear();
        self.persist(&values).await
    }
}
