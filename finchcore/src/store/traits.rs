use crate::read_state::ReadPositionTag;
use crate::store::error::Result;
use crate::types::account::AccountId;
use crate::types::tab::FilterArgs;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The two item collections unread counting runs against. Each has its own
/// timestamp field in the backing store, so the scope must be carried
/// through to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentScope {
    Statuses,
    Activities,
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Count items in `scope` belonging to `accounts` that pass `args` and
    /// whose timestamp is beyond `newer_than` (strictly, when
    /// `strictly_after` is set).
    async fn count(
        &self,
        scope: ContentScope,
        args: &FilterArgs,
        newer_than: i64,
        strictly_after: bool,
        accounts: &[AccountId],
    ) -> Result<i64>;
}

#[async_trait]
pub trait ReadStateStore: Send + Sync {
    /// The last-read position recorded for `tag`, 0 if never recorded.
    async fn get_position(&self, tag: &ReadPositionTag) -> Result<i64>;

    /// Record `position` for `tag`.
    async fn set_position(&self, tag: &ReadPositionTag, position: i64) -> Result<()>;
}
