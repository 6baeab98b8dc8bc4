use finch_rust::store::{ActivityItem, MemoryItemStore, StatusItem};
use finch_rust::types::account::AccountId;
use finch_rust::types::tab::FilterArgs;
use finchcore::store::traits::{ContentScope, ItemStore};

fn account(id: &str) -> AccountId {
    AccountId::new(id, "birdsite.example")
}

#[tokio::test]
async fn threshold_boundary_respects_strictly_after() {
    let store = MemoryItemStore::new();
    let alice = account("alice");
    store.add_status(alice.clone(), StatusItem::plain(100)).await;

    let args = FilterArgs::default();
    let accounts = vec![alice];

    let strict = store
        .count(ContentScope::Statuses, &args, 100, true, &accounts)
        .await
        .unwrap();
    let inclusive = store
        .count(ContentScope::Statuses, &args, 100, false, &accounts)
        .await
        .unwrap();

    assert_eq!(strict, 0);
    assert_eq!(inclusive, 1);
}

#[tokio::test]
async fn scopes_are_counted_separately() {
    let store = MemoryItemStore::new();
    let alice = account("alice");
    store.add_status(alice.clone(), StatusItem::plain(10)).await;
    store.add_status(alice.clone(), StatusItem::plain(20)).await;
    store
        .add_activity(alice.clone(), ActivityItem { timestamp: 30 })
        .await;

    let args = FilterArgs::default();
    let accounts = vec![alice];

    let statuses = store
        .count(ContentScope::Statuses, &args, 0, true, &accounts)
        .await
        .unwrap();
    let activities = store
        .count(ContentScope::Activities, &args, 0, true, &accounts)
        .await
        .unwrap();

    assert_eq!(statuses, 2);
    assert_eq!(activities, 1);
}

#[tokio::test]
async fn filter_args_exclude_replies_and_reposts() {
    let store = MemoryItemStore::new();
    let alice = account("alice");
    store.add_status(alice.clone(), StatusItem::plain(1)).await;
    store
        .add_status(
            alice.clone(),
            StatusItem {
                timestamp: 2,
                is_reply: true,
                is_repost: false,
            },
        )
        .await;
    store
        .add_status(
            alice.clone(),
            StatusItem {
                timestamp: 3,
                is_reply: false,
                is_repost: true,
            },
        )
        .await;

    let accounts = vec![alice];
    let everything = store
        .count(
            ContentScope::Statuses,
            &FilterArgs::default(),
            0,
            true,
            &accounts,
        )
        .await
        .unwrap();
    let originals_only = store
        .count(
            ContentScope::Statuses,
            &FilterArgs {
                include_replies: false,
                include_reposts: false,
            },
            0,
            true,
            &accounts,
        )
        .await
        .unwrap();

    assert_eq!(everything, 3);
    assert_eq!(originals_only, 1);
}

#[tokio::test]
async fn counts_are_restricted_to_the_given_accounts() {
    let store = MemoryItemStore::new();
    let alice = account("alice");
    let bob = account("bob");
    store.add_status(alice.clone(), StatusItem::plain(5)).await;
    store.add_status(bob.clone(), StatusItem::plain(6)).await;
    store.add_status(bob.clone(), StatusItem::plain(7)).await;

    let args = FilterArgs::default();

    let only_alice = store
        .count(ContentScope::Statuses, &args, 0, true, &[alice.clone()])
        .await
        .unwrap();
    let both = store
        .count(ContentScope::Statuses, &args, 0, true, &[alice, bob])
        .await
        .unwrap();

    assert_eq!(only_alice, 1);
    assert_eq!(both, 3);
}
