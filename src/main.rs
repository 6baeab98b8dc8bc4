use chrono::{Local, Utc};
use finch_rust::config::UnreadConfig;
use finch_rust::read_state::ReadStateManager;
use finch_rust::registry::{AccountRegistry, TabRegistry};
use finch_rust::store::{
    ActivityItem, FileReadStateStore, MemoryItemStore, MemoryReadStateStore, StatusItem,
};
use finch_rust::types::account::AccountId;
use finch_rust::types::events::EventBus;
use finch_rust::types::tab::{TabKind, TabSpec};
use finch_rust::types::ReadPositionTag;
use finch_rust::unread::UnreadWorker;
use finchcore::store::traits::ReadStateStore;
use log::info;
use std::sync::Arc;
use std::time::Duration;

// This is a demo of the unread-count worker over in-memory stores.
//
// Usage:
//   cargo run                                # volatile read markers
//   cargo run -- --data-dir ./finch-state    # persist read markers as JSON
//   cargo run -- -d ./finch-state            # short form

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let data_dir = parse_arg(&args, "--data-dir", "-d");

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{:<5}] [{}] - {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime");

    rt.block_on(async {
        let alice = AccountId::new("1001", "birdsite.example");
        let bob = AccountId::new("1002", "birdsite.example");

        let bus = Arc::new(EventBus::new());

        let accounts = Arc::new(AccountRegistry::new(bus.clone()));
        accounts
            .set_active(vec![alice.clone(), bob.clone()])
            .await;

        let tabs = Arc::new(TabRegistry::with_tabs(vec![
            TabSpec::new(TabKind::HomeTimeline),
            TabSpec::new(TabKind::NotificationsTimeline),
            TabSpec::new(TabKind::Favorites),
        ]));

        let now = Utc::now().timestamp_millis();
        let items = Arc::new(MemoryItemStore::new());
        items
            .add_status(alice.clone(), StatusItem::plain(now - 5_000))
            .await;
        items
            .add_status(alice.clone(), StatusItem::plain(now - 3_000))
            .await;
        items
            .add_status(bob.clone(), StatusItem::plain(now - 2_000))
            .await;
        items
            .add_activity(alice.clone(), ActivityItem { timestamp: now - 1_500 })
            .await;
        items
            .add_activity(bob.clone(), ActivityItem { timestamp: now - 900 })
            .await;

        let backing: Arc<dyn ReadStateStore> = match data_dir {
            Some(dir) => {
                info!(target: "Demo", "Persisting read markers under {dir}");
                Arc::new(FileReadStateStore::new(dir).await?)
            }
            None => Arc::new(MemoryReadStateStore::new()),
        };
        let read_state = Arc::new(ReadStateManager::new(backing, bus.clone()));

        let worker = UnreadWorker::new(
            items,
            read_state.clone(),
            tabs,
            accounts,
            bus.clone(),
            UnreadConfig::default(),
        );

        // Log badges and completed passes as they arrive.
        let mut badge_rx = bus.tab_badge.subscribe();
        let mut counts_rx = bus.unread_counts.subscribe();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    badge = badge_rx.recv() => match badge {
                        Ok(badge) if badge.has_count() => {
                            info!(target: "Demo", "Tab {} badge: {}", badge.index, badge.count);
                        }
                        Ok(badge) => {
                            info!(target: "Demo", "Tab {} carries no badge", badge.index);
                        }
                        Err(_) => return,
                    },
                    counts = counts_rx.recv() => match counts {
                        Ok(update) => {
                            info!(target: "Demo", "Pass complete: {:?}", update.counts);
                        }
                        Err(_) => return,
                    },
                }
            }
        });

        tokio::spawn(worker.clone().run());

        worker.prime().await;
        worker.clone().request_update();
        tokio::time::sleep(Duration::from_millis(300)).await;

        // Catch Alice's home timeline up past her first status; the marker
        // advance triggers a fresh pass through the refresh loop.
        read_state
            .advance(&ReadPositionTag::home_timeline(alice), now - 4_000)
            .await?;
        tokio::time::sleep(Duration::from_millis(300)).await;

        worker.shutdown();
        Ok(())
    })
}

fn parse_arg(args: &[String], long: &str, short: &str) -> Option<String> {
    let long_prefix = format!("{}=", long);
    let mut iter = args.iter().skip(1); // Skip program name
    while let Some(arg) = iter.next() {
        if arg == long || arg == short {
            return iter.next().cloned();
        }
        if let Some(value) = arg.strip_prefix(&long_prefix) {
            return Some(value.to_string());
        }
    }
    None
}
