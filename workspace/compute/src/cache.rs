use cached::{Cached, UnboundCache};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, trace};

use crate::error::{ComputeError, Result};
use crate::generator::SeriesGenerator;
use crate::series::SampleSeries;

/// Identifies one memoized series inside a cache store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesKey(String);

impl SeriesKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SeriesKey {
    fn default() -> Self {
        Self::new("temperature")
    }
}

/// Memoizes the output of a [`SeriesGenerator`].
///
/// The first call to [`get_or_generate`](Self::get_or_generate) draws a series
/// and stores it under the cache key; every later call hands out the same
/// `Arc` until [`clear`](Self::clear) is called. Generation happens while the
/// store lock is held, so concurrent first calls still generate only once.
pub struct SeriesCache<
    C: Cached<SeriesKey, Arc<SampleSeries>> = UnboundCache<SeriesKey, Arc<SampleSeries>>,
> {
    generator: SeriesGenerator,
    key: SeriesKey,
    store: Arc<Mutex<C>>,
    generations: AtomicUsize,
}

impl SeriesCache {
    /// Creates an empty cache for `generator` with an unbounded store.
    pub fn new(generator: SeriesGenerator) -> Self {
        Self::new_with_store(generator, SeriesKey::default(), UnboundCache::new())
    }
}

impl<C: Cached<SeriesKey, Arc<SampleSeries>>> SeriesCache<C> {
    /// Creates a cache over a custom store, memoizing under `key`.
    pub fn new_with_store(generator: SeriesGenerator, key: SeriesKey, store: C) -> Self {
        Self {
            generator,
            key,
            store: Arc::new(Mutex::new(store)),
            generations: AtomicUsize::new(0),
        }
    }

    /// Returns the memoized series, generating it on first use.
    pub fn get_or_generate(&self) -> Result<Arc<SampleSeries>> {
        let mut store = self.lock()?;

        if let Some(series) = store.cache_get(&self.key) {
            trace!(key = self.key.as_str(), "Series cache hit");
            return Ok(Arc::clone(series));
        }

        let series = Arc::new(self.generator.generate()?);
        store.cache_set(self.key.clone(), Arc::clone(&series));
        let generations = self.generations.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(key = self.key.as_str(), generations, "Series cache filled");

        Ok(series)
    }

    /// Drops the memoized series so the next call regenerates.
    pub fn clear(&self) -> Result<()> {
        self.lock()?.cache_clear();
        debug!(key = self.key.as_str(), "Series cache cleared");
        Ok(())
    }

    #[cfg(test)]
    fn is_cached(&self) -> Result<bool> {
        Ok(self.lock()?.cache_get(&self.key).is_some())
    }

    /// How many times this cache has called the generator.
    pub fn generation_count(&self) -> usize {
        self.generations.load(Ordering::SeqCst)
    }

    fn lock(&self) -> Result<MutexGuard<'_, C>> {
        self.store.lock().map_err(|e| {
            let err = ComputeError::Cache(format!("series store lock poisoned: {e}"));
            error!(key = self.key.as_str(), ?err, "Series cache unavailable");
            err
        })
    }
}

impl<C: Cached<SeriesKey, Arc<SampleSeries>>> fmt::Debug for SeriesCache<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeriesCache")
            .field("key", &self.key)
            .field("generator", &self.generator)
            .field("generations", &self.generation_count())
            .finish()
    }
}
