use async_trait::async_trait;
use finchcore::read_state::ReadPositionTag;
use finchcore::store::error::{Result, StoreError};
use finchcore::store::traits::ReadStateStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// Read markers persisted as one JSON document per base tag, each mapping
/// rendered account ids to positions. The file-per-tag layout keeps a
/// marker update from rewriting unrelated state.
pub struct FileReadStateStore {
    base_path: PathBuf,
    // Serializes the read-modify-write of a per-tag document.
    write_lock: Mutex<()>,
}

impl FileReadStateStore {
    pub async fn new(path: impl Into<PathBuf>) -> io::Result<Self> {
        let base_path = path.into();
        fs::create_dir_all(&base_path).await?;
        Ok(Self {
            base_path,
            write_lock: Mutex::new(()),
        })
    }

    fn path_for(&self, base_tag: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.json", Self::sanitize_filename(base_tag)))
    }

    fn sanitize_filename(key: &str) -> String {
        key.replace(|c: char| !c.is_alphanumeric() && c != '.' && c != '-', "_")
    }

    async fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        match fs::read(path).await {
            Ok(data) => serde_json::from_slice(&data)
                .map(Some)
                .map_err(|e| StoreError::Serialization(e.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let data = serde_json::to_vec_pretty(value)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(path, data).await.map_err(StoreError::Io)
    }

    async fn load_positions(&self, base_tag: &str) -> Result<HashMap<String, i64>> {
        Ok(self
            .read_json(&self.path_for(base_tag))
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl ReadStateStore for FileReadStateStore {
    async fn get_position(&self, tag: &ReadPositionTag) -> Result<i64> {
        let positions = self.load_positions(tag.base).await?;
        Ok(positions
            .get(&tag.account.to_string())
            .copied()
            .unwrap_or(0))
    }

    async fn set_position(&self, tag: &ReadPositionTag, position: i64) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut positions = self.load_positions(tag.base).await?;
        positions.insert(tag.account.to_string(), position);
        self.write_json(&self.path_for(tag.base), &positions).await
    }
}
