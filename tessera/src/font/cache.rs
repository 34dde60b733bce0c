use super::{BakedFont, FontError, FontFile, GlyphSource};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Baked fonts keyed by pixel height.
///
/// Each height is baked at most once, under the cache lock, and shared from
/// then on. Entries are never evicted.
pub struct FontCache {
    source: Arc<dyn GlyphSource>,
    fonts: Mutex<FxHashMap<u32, Arc<BakedFont>>>,
}

impl FontCache {
    pub fn new(source: impl GlyphSource + 'static) -> Self {
        Self::from_shared(Arc::new(source))
    }

    pub fn from_shared(source: Arc<dyn GlyphSource>) -> Self {
        Self {
            source,
            fonts: Mutex::new(FxHashMap::default()),
        }
    }

    /// Cache over the font file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FontError> {
        Ok(Self::new(FontFile::open(path)?))
    }

    pub fn get_or_create(&self, pixel_height: u32) -> Result<Arc<BakedFont>, FontError> {
        let mut fonts = self.fonts.lock();
        if let Some(font) = fonts.get(&pixel_height) {
            return Ok(font.clone());
        }

        debug!("FontCache miss for {} at {}px", self.source.name(), pixel_height);
        let font = Arc::new(BakedFont::bake(self.source.as_ref(), pixel_height)?);
        fonts.insert(pixel_height, font.clone());
        Ok(font)
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn len(&self) -> usize {
        self.fonts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for FontCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontCache")
            .field("source", &self.source.name())
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{BlockGlyphs, RasterizedGlyph};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        bakes: AtomicUsize,
    }

    impl GlyphSource for CountingSource {
        fn name(&self) -> &str {
            "counting"
        }

        fn rasterize(
            &self,
            pixel_height: u32,
            chars: &[char],
        ) -> Result<Vec<RasterizedGlyph>, FontError> {
            self.bakes.fetch_add(1, Ordering::SeqCst);
            BlockGlyphs::new().rasterize(pixel_height, chars)
        }
    }

    #[test]
    fn test_same_height_is_shared() {
        let cache = FontCache::new(BlockGlyphs::new());

        let a = cache.get_or_create(16).unwrap();
        let b = cache.get_or_create(16).unwrap();
        let c = cache.get_or_create(24).unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_concurrent_requests_bake_once() {
        let source = Arc::new(CountingSource {
            bakes: AtomicUsize::new(0),
        });
        let cache = Arc::new(FontCache::from_shared(source.clone()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                std::thread::spawn(move || cache.get_or_create(32).unwrap())
            })
            .collect();
        let fonts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(source.bakes.load(Ordering::SeqCst), 1);
        assert!(fonts.iter().all(|f| Arc::ptr_eq(f, &fonts[0])));
    }

    #[test]
    fn test_failed_bake_is_not_cached() {
        let cache = FontCache::new(BlockGlyphs::new());

        assert!(cache.get_or_create(0).is_err());
        assert!(cache.is_empty());
    }
}
