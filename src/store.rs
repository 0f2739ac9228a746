//! Persistence port for the storefront blob.
//!
//! The blob is a single JSON document `{cart, user, orders}` stored under one
//! key. The catalog is never part of it.

use std::{
    fs, io,
    path::PathBuf,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{CartEntry, Order, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Io(#[from] io::Error),

    #[error("stored state is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage unavailable")]
    Unavailable,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPersistedState")]
pub struct PersistedState {
    pub cart: Vec<CartEntry>,
    pub user: Option<User>,
    pub orders: Vec<Order>,
}

// Fields may be missing or null in older blobs.
#[derive(Deserialize)]
struct RawPersistedState {
    #[serde(default)]
    cart: Option<Vec<CartEntry>>,
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    orders: Option<Vec<Order>>,
}

impl From<RawPersistedState> for PersistedState {
    fn from(raw: RawPersistedState) -> Self {
        Self {
            cart: normalize_cart(raw.cart.unwrap_or_default()),
            user: raw.user,
            orders: raw.orders.unwrap_or_default(),
        }
    }
}

/// Drops zero quantities and merges duplicate product ids, keeping first-seen order.
fn normalize_cart(entries: Vec<CartEntry>) -> Vec<CartEntry> {
    let mut cart: Vec<CartEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.quantity == 0 {
            tracing::warn!(
                product_id = entry.product_id,
                "dropping empty cart entry from stored state"
            );
            continue;
        }
        match cart.iter_mut().find(|e| e.product_id == entry.product_id) {
            Some(existing) => {
                tracing::warn!(
                    product_id = entry.product_id,
                    "merging duplicate cart entry from stored state"
                );
                existing.quantity = existing.quantity.saturating_add(entry.quantity);
            }
            None => cart.push(entry),
        }
    }
    cart
}

pub trait StateStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<PersistedState>, StoreError>;
    fn save(&self, state: &PersistedState) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

impl<T: StateStore + ?Sized> StateStore for Arc<T> {
    fn load(&self) -> Result<Option<PersistedState>, StoreError> {
        (**self).load()
    }

    fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        (**self).save(state)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// Stores the blob as `<dir>/<key>.json`. Writes go through a temp file and a
/// rename so a crash never leaves a half-written blob behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<Option<PersistedState>, StoreError> {
        let raw = match fs::read_to_string(self.path()) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let body = serde_json::to_vec(state)?;
        let tmp = self.dir.join(format!("{}.{}.tmp", self.key, Uuid::new_v4()));
        fs::write(&tmp, body)?;
        if let Err(err) = fs::rename(&tmp, self.path()) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-process store holding the serialized blob, like a browser's local storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an arbitrary raw blob, valid or not.
    pub fn with_blob(raw: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(raw.into())),
            failing: AtomicBool::new(false),
        }
    }

    /// While set, every operation fails with [`StoreError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn raw(&self) -> Option<String> {
        self.blob.lock().ok().and_then(|blob| blob.clone())
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        Ok(())
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<PersistedState>, StoreError> {
        self.check()?;
        let blob = self.blob.lock().map_err(|_| StoreError::Unavailable)?;
        match blob.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, state: &PersistedState) -> Result<(), StoreError> {
        self.check()?;
        let raw = serde_json::to_string(state)?;
        *self.blob.lock().map_err(|_| StoreError::Unavailable)? = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.check()?;
        *self.blob.lock().map_err(|_| StoreError::Unavailable)? = None;
        Ok(())
    }
}
