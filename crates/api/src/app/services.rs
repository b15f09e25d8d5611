use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError, RwLock};

use uuid::Uuid;

use stockmgr_store::InventoryStore;

/// Shared application services.
///
/// The store sits behind a single mutex: each request runs one operation to
/// completion while holding it.
#[derive(Debug)]
pub struct AppServices {
    store: Mutex<InventoryStore>,
    sessions: SessionStore,
}

impl AppServices {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            store: Mutex::new(store),
            sessions: SessionStore::default(),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&InventoryStore) -> T) -> T {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut InventoryStore) -> T) -> T {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

/// Upper bound on concurrently open sessions.
pub const MAX_SESSIONS: usize = 1024;

/// Live sessions: token -> username.
///
/// Tokens are UUIDv7, so key order is issue order; when full, the oldest
/// session is dropped to make room.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<BTreeMap<String, String>>,
}

impl SessionStore {
    /// Open a session and return its bearer token.
    pub fn open(&self, username: &str) -> String {
        let token = Uuid::now_v7().simple().to_string();
        let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        while sessions.len() >= MAX_SESSIONS {
            if let Some((_, evicted)) = sessions.pop_first() {
                tracing::debug!(username = %evicted, "session evicted");
            }
        }
        sessions.insert(token.clone(), username.to_string());
        token
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn username(&self, token: &str) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    /// Close a session. Returns whether it was open.
    pub fn close(&self, token: &str) -> bool {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token)
            .is_some()
    }
}
