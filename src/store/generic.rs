use std::collections::HashMap;
use std::hash::Hash;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct GenericMemoryStore<K, V>
where
    K: Eq + Hash + Send,
    V: Send,
{
    store: Mutex<HashMap<K, V>>,
}

impl<K, V> GenericMemoryStore<K, V>
where
    K: Eq + Hash + Send + Clone + Sync,
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        self.store.lock().await.get(key).cloned()
    }

    pub async fn put(&self, key: K, value: V) {
        self.store.lock().await.insert(key, value);
    }

    /// Apply `f` to the entry for `key`, inserting a default value first
    /// when the key is absent.
    pub async fn modify<F>(&self, key: K, f: F)
    where
        V: Default,
        F: FnOnce(&mut V),
    {
        let mut store = self.store.lock().await;
        f(store.entry(key).or_default());
    }
}
