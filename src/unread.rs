use crate::config::UnreadConfig;
use crate::registry::{AccountRegistry, TabRegistry};
use crate::store::{TimedItemStore, TimedReadStateStore};
use crate::types::events::{EventBus, UnreadCountsUpdated};
use finchcore::aggregator;
use finchcore::store::traits::{ItemStore, ReadStateStore};
use finchcore::types::badge::TabBadge;
use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;
use tokio::sync::broadcast::error::RecvError;

/// Runs unread-count aggregation passes on a background task.
///
/// At most one pass is in flight at a time; a request made while one is
/// running is skipped rather than queued. Each pass snapshots the tab list
/// and active account set at start, streams one [`TabBadge`] per tab onto
/// the bus in index order, and publishes the final count map only when it
/// runs to completion. Store calls are bounded by the configured deadline.
pub struct UnreadWorker {
    items: Arc<dyn ItemStore>,
    read_state: Arc<dyn ReadStateStore>,
    tabs: Arc<TabRegistry>,
    accounts: Arc<AccountRegistry>,
    bus: Arc<EventBus>,
    config: UnreadConfig,
    running: Arc<AtomicBool>,
    shutdown_notifier: Arc<Notify>,
}

impl UnreadWorker {
    pub fn new(
        items: Arc<dyn ItemStore>,
        read_state: Arc<dyn ReadStateStore>,
        tabs: Arc<TabRegistry>,
        accounts: Arc<AccountRegistry>,
        bus: Arc<EventBus>,
        config: UnreadConfig,
    ) -> Arc<Self> {
        let items: Arc<dyn ItemStore> =
            Arc::new(TimedItemStore::new(items, config.store_call_timeout));
        let read_state: Arc<dyn ReadStateStore> = Arc::new(TimedReadStateStore::new(
            read_state,
            config.store_call_timeout,
        ));
        Arc::new(Self {
            items,
            read_state,
            tabs,
            accounts,
            bus,
            config,
            running: Arc::new(AtomicBool::new(false)),
            shutdown_notifier: Arc::new(Notify::new()),
        })
    }

    /// Publish a zero badge for every tab so indicators can render before
    /// the first pass completes.
    pub async fn prime(&self) {
        if !self.config.display_badges {
            return;
        }
        let tabs = self.tabs.snapshot().await;
        for index in 0..tabs.len() {
            let _ = self
                .bus
                .tab_badge
                .send(Arc::new(TabBadge { index, count: 0 }));
        }
    }

    /// Request a new aggregation pass. Returns false when a pass is already
    /// in flight; the request is skipped, not queued.
    pub fn request_update(self: Arc<Self>) -> bool {
        if self.running.swap(true, Ordering::SeqCst) {
            debug!(target: "Unread/Worker", "Pass already running, skipping update request");
            return false;
        }
        let running = self.running.clone();
        tokio::spawn(async move {
            let _clear = scopeguard::guard(running, |running| {
                running.store(false, Ordering::SeqCst);
            });
            tokio::select! {
                _ = self.shutdown_notifier.notified() => {
                    debug!(target: "Unread/Worker", "Shutdown signaled, abandoning pass in flight.");
                }
                _ = self.run_pass() => {}
            }
        });
        true
    }

    async fn run_pass(&self) {
        let tabs = self.tabs.snapshot().await;
        let active = self.accounts.snapshot().await;
        debug!(
            target: "Unread/Worker",
            "Starting pass over {} tabs with {} active accounts",
            tabs.len(),
            active.len()
        );

        let bus = self.bus.clone();
        let display_badges = self.config.display_badges;
        let counts = aggregator::aggregate(
            &tabs,
            &active,
            self.items.as_ref(),
            self.read_state.as_ref(),
            |badge| {
                if display_badges {
                    let _ = bus.tab_badge.send(Arc::new(badge));
                }
            },
        )
        .await;

        info!(target: "Unread/Worker", "Unread counts updated for {} tabs", counts.len());
        let _ = self
            .bus
            .unread_counts
            .send(Arc::new(UnreadCountsUpdated { counts }));
    }

    /// The refresh loop. This should be spawned as a background task; it
    /// requests a new pass whenever a read marker advances or the active
    /// account set changes, and exits on shutdown.
    pub async fn run(self: Arc<Self>) {
        let mut read_positions = self.bus.read_position.subscribe();
        let mut accounts_changed = self.bus.accounts_changed.subscribe();

        loop {
            tokio::select! {
                _ = self.shutdown_notifier.notified() => {
                    debug!(target: "Unread/Worker", "Shutdown signaled, exiting refresh loop.");
                    return;
                }
                update = read_positions.recv() => match update {
                    Ok(update) => {
                        debug!(
                            target: "Unread/Worker",
                            "Read position advanced for {}, refreshing counts",
                            update.tag
                        );
                        self.clone().request_update();
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(target: "Unread/Worker", "Missed {skipped} read position updates, refreshing counts");
                        self.clone().request_update();
                    }
                    Err(RecvError::Closed) => return,
                },
                change = accounts_changed.recv() => match change {
                    Ok(change) => {
                        debug!(
                            target: "Unread/Worker",
                            "Active account set changed ({} accounts), refreshing counts",
                            change.active.len()
                        );
                        self.clone().request_update();
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(target: "Unread/Worker", "Missed {skipped} account changes, refreshing counts");
                        self.clone().request_update();
                    }
                    Err(RecvError::Closed) => return,
                },
            }
        }
    }

    /// Abort any in-flight pass and stop the refresh loop. Badges already
    /// published remain valid; no final count map is published for an
    /// aborted pass.
    pub fn shutdown(&self) {
        self.shutdown_notifier.notify_waiters();
    }
}
