//! Path-keyed cache of decoded images, shared across threads.

use super::RgbaImage;
use crate::error::{Error, Result};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::info;

type Slot = Arc<Mutex<Option<Arc<RgbaImage>>>>;

/// Decodes each image file once and hands out shared references to it.
///
/// The cache must be [`init`](Self::init)ialized before the first
/// [`load`](Self::load). Every path owns a slot that is created under the map
/// lock and filled under its own lock, so different paths decode in parallel
/// while callers racing on the same path wait for a single decode. A failed
/// decode removes its slot again, so missing files do not accumulate.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: Option<Mutex<FxHashMap<String, Slot>>>,
}

impl ImageCache {
    /// Initialized, empty cache.
    pub fn new() -> Self {
        let mut cache = Self::default();
        cache.init();
        cache
    }

    /// Prepares the cache for use. Calling it again keeps existing entries.
    pub fn init(&mut self) {
        if self.entries.is_none() {
            self.entries = Some(Mutex::new(FxHashMap::default()));
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.entries.is_some()
    }

    pub fn load(&self, path: &str) -> Result<Arc<RgbaImage>> {
        let entries = self.entries.as_ref().ok_or(Error::CacheUninitialized)?;

        let slot = entries.lock().entry(path.to_owned()).or_default().clone();

        let mut guard = slot.lock();
        if let Some(image) = guard.as_ref() {
            return Ok(image.clone());
        }

        info!("Loading and caching image: {}", path);
        match RgbaImage::load(path) {
            Ok(image) => {
                let image = Arc::new(image);
                *guard = Some(image.clone());
                // A failed load may have dropped this slot while we waited on it.
                entries
                    .lock()
                    .entry(path.to_owned())
                    .or_insert_with(|| slot.clone());
                Ok(image)
            }
            Err(err) => {
                let mut entries = entries.lock();
                if entries
                    .get(path)
                    .is_some_and(|current| Arc::ptr_eq(current, &slot))
                {
                    entries.remove(path);
                }
                Err(err)
            }
        }
    }

    /// Number of paths with a decoded image.
    pub fn len(&self) -> usize {
        self.slots().iter().filter(|slot| slot.lock().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, path: &str) -> bool {
        let slot = match &self.entries {
            Some(entries) => entries.lock().get(path).cloned(),
            None => None,
        };
        slot.is_some_and(|slot| slot.lock().is_some())
    }

    // Snapshot: a slot lock is never taken while the map is locked.
    fn slots(&self) -> Vec<Slot> {
        match &self.entries {
            Some(entries) => entries.lock().values().cloned().collect(),
            None => Vec::new(),
        }
    }
}
