use finchcore::read_state::ReadPositionTag;
use finchcore::types::account::AccountId;
use finchcore::types::badge::{AggregationResult, TabBadge};
use std::sync::Arc;
use tokio::sync::broadcast;

// The size of the broadcast channel buffer.
const CHANNEL_CAPACITY: usize = 100;

/// Final outcome of a completed aggregation pass. Published exactly once
/// per pass that runs to completion; never published for a cancelled pass.
#[derive(Debug, Clone)]
pub struct UnreadCountsUpdated {
    pub counts: AggregationResult,
}

/// A read marker moved forward for one tag.
#[derive(Debug, Clone)]
pub struct ReadPositionUpdate {
    pub tag: ReadPositionTag,
    pub position: i64,
}

/// The active account set was replaced.
#[derive(Debug, Clone)]
pub struct AccountsChanged {
    pub active: Vec<AccountId>,
}

// Macro to generate EventBus fields and constructor
macro_rules! define_event_bus {
    ($(($field:ident, $type:ty)),* $(,)?) => {
        /// Typed event bus that provides separate broadcast channels for each event type.
        #[derive(Debug)]
        pub struct EventBus {
            $(
                pub $field: broadcast::Sender<$type>,
            )*
        }

        impl EventBus {
            pub fn new() -> Self {
                Self {
                    $(
                        $field: broadcast::channel(CHANNEL_CAPACITY).0,
                    )*
                }
            }
        }
    };
}

// Define the EventBus structure and implementation using the macro
define_event_bus! {
    // Unread counting events
    (tab_badge, Arc<TabBadge>),
    (unread_counts, Arc<UnreadCountsUpdated>),

    // State change events that trigger a new pass
    (read_position, Arc<ReadPositionUpdate>),
    (accounts_changed, Arc<AccountsChanged>),
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
