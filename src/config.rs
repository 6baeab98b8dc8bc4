use std::time::Duration;

/// Settings for the unread-count worker.
#[derive(Clone, Debug)]
pub struct UnreadConfig {
    /// Upper bound on any single store call made during a pass. An elapsed
    /// deadline degrades the tab being processed, not the whole pass.
    pub store_call_timeout: Duration,
    /// When false, per-tab badge events are suppressed; final count maps
    /// are still published.
    pub display_badges: bool,
}

impl Default for UnreadConfig {
    fn default() -> Self {
        Self {
            store_call_timeout: Duration::from_secs(10),
            display_badges: true,
        }
    }
}
