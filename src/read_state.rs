use crate::types::events::{EventBus, ReadPositionUpdate};
use async_trait::async_trait;
use finchcore::read_state::ReadPositionTag;
use finchcore::store::error::Result;
use finchcore::store::traits::ReadStateStore;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Caching front for a [`ReadStateStore`] that also publishes marker
/// advances on the event bus so the unread worker can refresh counts.
///
/// Markers only move forward: [`ReadStateManager::advance`] ignores a
/// position at or below the recorded one. Reads populate the cache, so a
/// pass over many tabs hits the backing store at most once per tag.
pub struct ReadStateManager {
    store: Arc<dyn ReadStateStore>,
    cache: RwLock<HashMap<String, i64>>,
    bus: Arc<EventBus>,
}

impl ReadStateManager {
    pub fn new(store: Arc<dyn ReadStateStore>, bus: Arc<EventBus>) -> Self {
        Self {
            store,
            cache: RwLock::new(HashMap::new()),
            bus,
        }
    }

    /// Move the marker for `tag` forward to `position`. Returns whether it
    /// actually advanced; a stale or duplicate position is a no-op and
    /// publishes nothing.
    pub async fn advance(&self, tag: &ReadPositionTag, position: i64) -> Result<bool> {
        let current = self.get_position(tag).await?;
        if position <= current {
            return Ok(false);
        }
        self.store.set_position(tag, position).await?;
        self.cache.write().await.insert(tag.to_string(), position);
        debug!(target: "ReadState", "Advanced {tag} from {current} to {position}");
        let _ = self.bus.read_position.send(Arc::new(ReadPositionUpdate {
            tag: tag.clone(),
            position,
        }));
        Ok(true)
    }
}

#[async_trait]
impl ReadStateStore for ReadStateManager {
    async fn get_position(&self, tag: &ReadPositionTag) -> Result<i64> {
        let key = tag.to_string();
        if let Some(position) = self.cache.read().await.get(&key) {
            return Ok(*position);
        }
        let position = self.store.get_position(tag).await?;
        self.cache.write().await.insert(key, position);
        Ok(position)
    }

    async fn set_position(&self, tag: &ReadPositionTag, position: i64) -> Result<()> {
        self.advance(tag, position).await.map(|_| ())
    }
}
