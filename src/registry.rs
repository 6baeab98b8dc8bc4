use crate::types::events::{AccountsChanged, EventBus};
use finchcore::types::account::AccountId;
use finchcore::types::tab::TabSpec;
use log::info;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The set of accounts currently signed in and active. An aggregation pass
/// snapshots this once at start; later changes only affect later passes.
pub struct AccountRegistry {
    active: RwLock<Vec<AccountId>>,
    bus: Arc<EventBus>,
}

impl AccountRegistry {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self {
            active: RwLock::new(Vec::new()),
            bus,
        }
    }

    pub async fn snapshot(&self) -> Vec<AccountId> {
        self.active.read().await.clone()
    }

    /// Replace the active set and notify listeners.
    pub async fn set_active(&self, accounts: Vec<AccountId>) {
        info!(target: "Accounts", "Active account set replaced ({} accounts)", accounts.len());
        *self.active.write().await = accounts.clone();
        let _ = self
            .bus
            .accounts_changed
            .send(Arc::new(AccountsChanged { active: accounts }));
    }
}

/// Ordered tab list, as shown by the pager. Badge indices refer to
/// positions in this list at the time a pass snapshots it.
pub struct TabRegistry {
    tabs: RwLock<Vec<TabSpec>>,
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            tabs: RwLock::new(Vec::new()),
        }
    }

    pub fn with_tabs(tabs: Vec<TabSpec>) -> Self {
        Self {
            tabs: RwLock::new(tabs),
        }
    }

    pub async fn snapshot(&self) -> Vec<TabSpec> {
        self.tabs.read().await.clone()
    }

    pub async fn replace(&self, tabs: Vec<TabSpec>) {
        *self.tabs.write().await = tabs;
    }
}
