pub mod cache;
pub mod clock;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod generator;
pub mod regression;
pub mod rounding;
pub mod series;
pub mod statistics;

#[cfg(test)]
pub(crate) mod testing;

use cache::SeriesCache;
use generator::default_generator;

/// Returns a default pre-configured series cache that will be used most of the time.
///
/// The cache wraps the system-clock generator. `seed` fixes the random draws,
/// `None` uses fresh entropy, matching a live demo.
pub fn default_cache(seed: Option<u64>) -> SeriesCache {
    SeriesCache::new(default_generator(seed))
}
