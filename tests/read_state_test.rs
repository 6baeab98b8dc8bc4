use async_trait::async_trait;
use finch_rust::read_state::ReadStateManager;
use finch_rust::store::{FileReadStateStore, MemoryReadStateStore};
use finch_rust::types::ReadPositionTag;
use finch_rust::types::account::AccountId;
use finch_rust::types::events::EventBus;
use finchcore::store::error::Result;
use finchcore::store::traits::ReadStateStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::broadcast::error::TryRecvError;

fn account(id: &str) -> AccountId {
    AccountId::new(id, "birdsite.example")
}

/// Counts reads against the wrapped store, to observe cache behavior.
struct CountingReadStateStore {
    inner: MemoryReadStateStore,
    reads: AtomicUsize,
}

impl CountingReadStateStore {
    fn new() -> Self {
        Self {
            inner: MemoryReadStateStore::new(),
            reads: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ReadStateStore for CountingReadStateStore {
    async fn get_position(&self, tag: &ReadPositionTag) -> Result<i64> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_position(tag).await
    }

    async fn set_position(&self, tag: &ReadPositionTag, position: i64) -> Result<()> {
        self.inner.set_position(tag, position).await
    }
}

#[tokio::test]
async fn advance_is_forward_only_and_publishes_once() {
    let bus = Arc::new(EventBus::new());
    let mut updates = bus.read_position.subscribe();
    let manager = ReadStateManager::new(Arc::new(MemoryReadStateStore::new()), bus);

    let tag = ReadPositionTag::home_timeline(account("alice"));
    assert!(manager.advance(&tag, 10).await.unwrap());
    assert!(!manager.advance(&tag, 5).await.unwrap());
    assert!(!manager.advance(&tag, 10).await.unwrap());

    assert_eq!(manager.get_position(&tag).await.unwrap(), 10);

    let update = updates.try_recv().unwrap();
    assert_eq!(update.tag, tag);
    assert_eq!(update.position, 10);
    assert!(matches!(updates.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn set_position_goes_through_forward_only_advance() {
    let bus = Arc::new(EventBus::new());
    let manager = ReadStateManager::new(Arc::new(MemoryReadStateStore::new()), bus);

    let tag = ReadPositionTag::activities_about_me(account("alice"));
    manager.set_position(&tag, 20).await.unwrap();
    manager.set_position(&tag, 7).await.unwrap();

    assert_eq!(manager.get_position(&tag).await.unwrap(), 20);
}

#[tokio::test]
async fn reads_are_cached_after_the_first_store_hit() {
    let bus = Arc::new(EventBus::new());
    let backing = Arc::new(CountingReadStateStore::new());
    backing
        .set_position(&ReadPositionTag::home_timeline(account("alice")), 33)
        .await
        .unwrap();

    let manager = ReadStateManager::new(backing.clone(), bus);
    let tag = ReadPositionTag::home_timeline(account("alice"));

    assert_eq!(manager.get_position(&tag).await.unwrap(), 33);
    assert_eq!(manager.get_position(&tag).await.unwrap(), 33);
    assert_eq!(manager.get_position(&tag).await.unwrap(), 33);

    assert_eq!(backing.reads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn file_store_round_trips_markers_per_base_tag() {
    let dir = tempfile::tempdir().unwrap();
    let alice = account("alice");
    let bob = account("bob");

    {
        let store = FileReadStateStore::new(dir.path()).await.unwrap();
        store
            .set_position(&ReadPositionTag::home_timeline(alice.clone()), 42)
            .await
            .unwrap();
        store
            .set_position(&ReadPositionTag::home_timeline(bob.clone()), 13)
            .await
            .unwrap();
        store
            .set_position(&ReadPositionTag::activities_about_me(alice.clone()), 7)
            .await
            .unwrap();
    }

    let reopened = FileReadStateStore::new(dir.path()).await.unwrap();
    assert_eq!(
        reopened
            .get_position(&ReadPositionTag::home_timeline(alice.clone()))
            .await
            .unwrap(),
        42
    );
    assert_eq!(
        reopened
            .get_position(&ReadPositionTag::home_timeline(bob))
            .await
            .unwrap(),
        13
    );
    assert_eq!(
        reopened
            .get_position(&ReadPositionTag::activities_about_me(alice))
            .await
            .unwrap(),
        7
    );
    // A tag never written reads as 0.
    assert_eq!(
        reopened
            .get_position(&ReadPositionTag::activities_about_me(account("carol")))
            .await
            .unwrap(),
        0
    );

    assert!(dir.path().join("home_timeline.json").exists());
    assert!(dir.path().join("activities_about_me.json").exists());
}
