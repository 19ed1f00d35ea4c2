/// Persistence adapter: best-effort tab snapshots in client-side storage

use crate::ordering::TabOrdering;
use std::cell::RefCell;
use std::rc::Rc;

/// localStorage key holding the serialized tab ordering
pub const STORAGE_KEY: &str = "tab-strip-order";

/// Durable snapshot of the tab ordering.
///
/// Both operations are best-effort: `load` answers `None` for a missing
/// key, a storage failure, or unparseable JSON, and `save` swallows quota
/// and serialization errors. Callers fall back to their defaults; there is
/// no user-visible error path.
pub trait TabStore {
    fn load(&self) -> Option<TabOrdering>;
    fn save(&self, tabs: &TabOrdering);
}

/// `window.localStorage` under a fixed key
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> LocalStorageStore {
        LocalStorageStore { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TabStore for LocalStorageStore {
    fn load(&self) -> Option<TabOrdering> {
        let raw = Self::storage()?.get_item(&self.key).ok()??;
        match serde_json::from_str::<TabOrdering>(&raw) {
            Ok(tabs) => Some(tabs),
            Err(err) => {
                log::warn!("discarding unreadable tab snapshot: {}", err);
                None
            }
        }
    }

    fn save(&self, tabs: &TabOrdering) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let Ok(json) = serde_json::to_string(tabs) else {
            return;
        };
        if storage.set_item(&self.key, &json).is_err() {
            log::warn!("tab snapshot write failed (storage full?)");
        }
    }
}

/// In-memory store for tests and host-side embedding. Round-trips through
/// JSON the same way localStorage does.
#[derive(Default)]
pub struct MemoryStore {
    raw: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> MemoryStore {
        MemoryStore {
            raw: RefCell::new(Some(raw.into())),
        }
    }
}

impl TabStore for MemoryStore {
    fn load(&self) -> Option<TabOrdering> {
        let raw = self.raw.borrow();
        serde_json::from_str(raw.as_deref()?).ok()
    }

    fn save(&self, tabs: &TabOrdering) {
        if let Ok(json) = serde_json::to_string(tabs) {
            *self.raw.borrow_mut() = Some(json);
        }
    }
}

/// Cheap-clone handle so the adapter can travel through component props
/// instead of living as a hidden global.
#[derive(Clone)]
pub struct SharedStore(Rc<dyn TabStore>);

impl SharedStore {
    pub fn new(store: impl TabStore + 'static) -> SharedStore {
        SharedStore(Rc::new(store))
    }

    /// The default adapter: localStorage under [`STORAGE_KEY`]
    pub fn local() -> SharedStore {
        SharedStore::new(LocalStorageStore::new(STORAGE_KEY))
    }

    pub fn load(&self) -> Option<TabOrdering> {
        self.0.load()
    }

    pub fn save(&self, tabs: &TabOrdering) {
        self.0.save(tabs);
    }
}

impl PartialEq for SharedStore {
    fn eq(&self, other: &SharedStore) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for SharedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedStore")
    }
}
