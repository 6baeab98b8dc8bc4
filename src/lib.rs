// Re-export core modules so embedders depend on a single crate
pub use finchcore::{aggregator, store::error, store::traits};

// Core types are re-exported; events (with EventBus) remain here since they
// are tied to the tokio broadcast channels
pub mod types {
    pub use finchcore::read_state::{ReadPositionTag, read_position_tag};
    pub use finchcore::types::*;
    pub mod events;
}

pub mod config;
pub mod read_state;
pub mod registry;
pub mod store;
pub mod unread;
