use async_trait::async_trait;
use finchcore::read_state::ReadPositionTag;
use finchcore::store::error::{Result, StoreError};
use finchcore::store::traits::{ContentScope, ItemStore, ReadStateStore};
use finchcore::types::account::AccountId;
use finchcore::types::tab::FilterArgs;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Bounds every call to the wrapped item store with a deadline. An elapsed
/// deadline surfaces as [`StoreError::Timeout`], which the aggregation loop
/// contains to the tab being processed.
pub struct TimedItemStore {
    inner: Arc<dyn ItemStore>,
    deadline: Duration,
}

impl TimedItemStore {
    pub fn new(inner: Arc<dyn ItemStore>, deadline: Duration) -> Self {
        Self { inner, deadline }
    }
}

#[async_trait]
impl ItemStore for TimedItemStore {
    async fn count(
        &self,
        scope: ContentScope,
        args: &FilterArgs,
        newer_than: i64,
        strictly_after: bool,
        accounts: &[AccountId],
    ) -> Result<i64> {
        timeout(
            self.deadline,
            self.inner
                .count(scope, args, newer_than, strictly_after, accounts),
        )
        .await
        .map_err(|_| StoreError::Timeout)?
    }
}

/// Deadline wrapper for a read-state store, mirroring [`TimedItemStore`].
pub struct TimedReadStateStore {
    inner: Arc<dyn ReadStateStore>,
    deadline: Duration,
}

impl TimedReadStateStore {
    pub fn new(inner: Arc<dyn ReadStateStore>, deadline: Duration) -> Self {
        Self { inner, deadline }
    }
}

#[async_trait]
impl ReadStateStore for TimedReadStateStore {
    async fn get_position(&self, tag: &ReadPositionTag) -> Result<i64> {
        timeout(self.deadline, self.inner.get_position(tag))
            .await
            .map_err(|_| StoreError::Timeout)?
    }

    async fn set_position(&self, tag: &ReadPositionTag, position: i64) -> Result<()> {
        timeout(self.deadline, self.inner.set_position(tag, position))
            .await
            .map_err(|_| StoreError::Timeout)?
    }
}
