use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;

use crate::error::Result;

use super::locator::GeoLookup;
use super::record::GeoRecord;

pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Bounded, time-expiring LRU cache around any [`GeoLookup`]
///
/// Only successful lookups are stored. Expired entries are dropped when read.
pub struct CachedGeoLocator<L> {
    inner: L,
    ttl: Duration,
    entries: Mutex<LruCache<String, (Instant, GeoRecord)>>,
}

impl<L: GeoLookup> CachedGeoLocator<L> {
    pub fn new(inner: L, ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            ttl,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cached(&self, ip: &str) -> Option<GeoRecord> {
        let mut entries = self.entries.lock();
        match entries.get(ip) {
            Some((stored_at, record)) if stored_at.elapsed() < self.ttl => Some(record.clone()),
            Some(_) => {
                entries.pop(ip);
                None
            }
            None => None,
        }
    }

    fn store(&self, ip: &str, record: &GeoRecord) {
        self.entries
            .lock()
            .put(ip.to_string(), (Instant::now(), record.clone()));
    }
}

impl<L: GeoLookup> GeoLookup for CachedGeoLocator<L> {
    fn locate(&self, ip: &str) -> Result<GeoRecord> {
        if let Some(record) = self.cached(ip) {
            log::debug!("Geolocation cache hit for '{}'", ip);
            return Ok(record);
        }

        // The lock is not held across the lookup
        let record = self.inner.locate(ip)?;
        self.store(ip, &record);
        Ok(record)
    }
}
