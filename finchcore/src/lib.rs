pub mod aggregator;
pub mod read_state;
pub mod store;
pub mod types;

pub use aggregator::aggregate;
pub use types::account::AccountId;
pub use types::badge::{AggregationResult, NO_BADGE, TabBadge};
pub use types::tab::{FilterArgs, TabKind, TabSpec};
