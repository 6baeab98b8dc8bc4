use crate::store::generic::GenericMemoryStore;
use async_trait::async_trait;
use finchcore::read_state::ReadPositionTag;
use finchcore::store::error::Result;
use finchcore::store::traits::{ContentScope, ItemStore, ReadStateStore};
use finchcore::types::account::AccountId;
use finchcore::types::tab::FilterArgs;

/// One status row, keyed by the owning account in the store.
#[derive(Debug, Clone)]
pub struct StatusItem {
    pub timestamp: i64,
    pub is_reply: bool,
    pub is_repost: bool,
}

impl StatusItem {
    pub fn plain(timestamp: i64) -> Self {
        Self {
            timestamp,
            is_reply: false,
            is_repost: false,
        }
    }
}

/// One interaction/notification row.
#[derive(Debug, Clone)]
pub struct ActivityItem {
    pub timestamp: i64,
}

type StatusMap = GenericMemoryStore<AccountId, Vec<StatusItem>>;
type ActivityMap = GenericMemoryStore<AccountId, Vec<ActivityItem>>;

/// In-memory item store holding status and activity rows per account.
/// Intended for tests and demos; a real deployment backs [`ItemStore`]
/// with the client's content database.
pub struct MemoryItemStore {
    statuses: StatusMap,
    activities: ActivityMap,
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self {
            statuses: StatusMap::new(),
            activities: ActivityMap::new(),
        }
    }

    pub async fn add_status(&self, account: AccountId, item: StatusItem) {
        self.statuses
            .modify(account, |rows| rows.push(item))
            .await;
    }

    pub async fn add_activity(&self, account: AccountId, item: ActivityItem) {
        self.activities
            .modify(account, |rows| rows.push(item))
            .await;
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn count(
        &self,
        scope: ContentScope,
        args: &FilterArgs,
        newer_than: i64,
        strictly_after: bool,
        accounts: &[AccountId],
    ) -> Result<i64> {
        let passes = |timestamp: i64| {
            if strictly_after {
                timestamp > newer_than
            } else {
                timestamp >= newer_than
            }
        };

        let mut total = 0i64;
        match scope {
            ContentScope::Statuses => {
                for account in accounts {
                    if let Some(rows) = self.statuses.get(account).await {
                        total += rows
                            .iter()
                            .filter(|s| {
                                passes(s.timestamp)
                                    && (args.include_replies || !s.is_reply)
                                    && (args.include_reposts || !s.is_repost)
                            })
                            .count() as i64;
                    }
                }
            }
            ContentScope::Activities => {
                for account in accounts {
                    if let Some(rows) = self.activities.get(account).await {
                        total += rows.iter().filter(|a| passes(a.timestamp)).count() as i64;
                    }
                }
            }
        }
        Ok(total)
    }
}

type PositionMap = GenericMemoryStore<String, i64>;

/// In-memory read-state store, keyed by the rendered tag.
pub struct MemoryReadStateStore {
    positions: PositionMap,
}

impl Default for MemoryReadStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryReadStateStore {
    pub fn new() -> Self {
        Self {
            positions: PositionMap::new(),
        }
    }
}

#[async_trait]
impl ReadStateStore for MemoryReadStateStore {
    async fn get_position(&self, tag: &ReadPositionTag) -> Result<i64> {
        Ok(self.positions.get(&tag.to_string()).await.unwrap_or(0))
    }

    async fn set_position(&self, tag: &ReadPositionTag, position: i64) -> Result<()> {
        self.positions.put(tag.to_string(), position).await;
        Ok(())
    }
}
