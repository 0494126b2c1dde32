//! Bounded memoization of per-year holiday lists.
//!
//! [`HolidayCache`] keeps at most `max_size` years.  Each entry holds a frozen
//! `Arc<[Holiday]>`, an access counter, and its place in a recency list.  The
//! recency list is intrusive (each entry stores its neighbours' years), so a
//! touch is O(1).
//!
//! # Eviction
//! When a new year would overflow the cache, one entry is dropped first:
//!
//! * the least recently touched entry among those accessed at most once, or
//! * if every entry has been accessed more than once, the least recently
//!   touched entry overall.
//!
//! # Thread safety
//! Map, recency list and counters sit behind one `Mutex`, so a lookup and
//! the bookkeeping it causes are a single atomic step.

use std::collections::HashMap;
use std::mem::size_of;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::holiday::Holiday;
use crate::japan::HolidayEngine;
use jbd_core::ensure;
use jbd_core::errors::Result;

/// Capacity used by [`HolidayCache::new`].
pub const DEFAULT_MAX_SIZE: usize = 10;

/// Entries accessed at most this many times are evicted first.
const COLD_ACCESS_COUNT: u64 = 1;

/// Informational snapshot of a [`HolidayCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CacheStats {
    /// Number of cached years.
    pub size: usize,
    /// Capacity.
    pub max_size: usize,
    /// Year with the highest access count (most recent wins ties).
    pub most_accessed_year: Option<i32>,
    /// Rough heap footprint of the cached lists, in bytes.
    pub estimated_bytes: usize,
}

#[derive(Debug)]
struct Entry {
    holidays: Arc<[Holiday]>,
    access_count: u64,
    older: Option<i32>,
    newer: Option<i32>,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<i32, Entry>,
    oldest: Option<i32>,
    newest: Option<i32>,
}

impl CacheState {
    /// Walk the recency list from least to most recently touched.
    fn by_recency(&self) -> impl Iterator<Item = (i32, &Entry)> + '_ {
        let first = self
            .oldest
            .and_then(|y| self.entries.get(&y).map(|e| (y, e)));
        std::iter::successors(first, move |(_, e)| {
            e.newer
                .and_then(|y| self.entries.get(&y).map(|next| (y, next)))
        })
    }

    /// Detach `year` from the recency list (it stays in the map).
    fn unlink(&mut self, year: i32) {
        let Some(entry) = self.entries.get(&year) else {
            return;
        };
        let (older, newer) = (entry.older, entry.newer);
        match older.and_then(|y| self.entries.get_mut(&y)) {
            Some(e) => e.newer = newer,
            None => self.oldest = newer,
        }
        match newer.and_then(|y| self.entries.get_mut(&y)) {
            Some(e) => e.older = older,
            None => self.newest = older,
        }
    }

    /// Attach a detached `year` at the most-recent end.
    fn link_newest(&mut self, year: i32) {
        let previous_newest = self.newest;
        let Some(entry) = self.entries.get_mut(&year) else {
            return;
        };
        entry.older = previous_newest;
        entry.newer = None;
        match previous_newest.and_then(|y| self.entries.get_mut(&y)) {
            Some(e) => e.newer = Some(year),
            None => self.oldest = Some(year),
        }
        self.newest = Some(year);
    }

    /// Move `year` to the most-recent end and count the access.
    fn touch(&mut self, year: i32) -> Option<Arc<[Holiday]>> {
        if !self.entries.contains_key(&year) {
            return None;
        }
        self.unlink(year);
        self.link_newest(year);
        let entry = self.entries.get_mut(&year)?;
        entry.access_count += 1;
        Some(Arc::clone(&entry.holidays))
    }

    fn remove(&mut self, year: i32) -> Option<Entry> {
        self.unlink(year);
        self.entries.remove(&year)
    }

    fn eviction_candidate(&self) -> Option<i32> {
        self.by_recency()
            .find(|(_, e)| e.access_count <= COLD_ACCESS_COUNT)
            .map(|(year, _)| year)
            .or(self.oldest)
    }

    /// Store `holidays` for `year`, evicting first if a new year would
    /// exceed `max_size`.  Counts as a touch.
    fn insert(&mut self, year: i32, holidays: Arc<[Holiday]>, max_size: usize) -> Arc<[Holiday]> {
        let frozen = Arc::clone(&holidays);
        if let Some(entry) = self.entries.get_mut(&year) {
            entry.holidays = holidays;
        } else {
            if self.entries.len() >= max_size {
                if let Some(victim) = self.eviction_candidate() {
                    if let Some(evicted) = self.remove(victim) {
                        tracing::debug!(
                            year = victim,
                            access_count = evicted.access_count,
                            "evicted holiday cache entry"
                        );
                    }
                }
            }
            self.entries.insert(
                year,
                Entry {
                    holidays,
                    access_count: 0,
                    older: None,
                    newer: None,
                },
            );
            self.link_newest(year);
            tracing::debug!(year, size = self.entries.len(), "cached holidays");
        }
        // the entry was just written, so touch always finds it
        self.touch(year).unwrap_or(frozen)
    }
}

/// Thread-safe, bounded cache of `year → holidays`.
///
/// ```
/// use jbd_time::{HolidayCache, HolidayEngine};
///
/// let cache = HolidayCache::new();
/// let engine = HolidayEngine::new();
/// let first = cache.get_or_compute(2024, &engine).unwrap();
/// let again = cache.get_or_compute(2024, &engine).unwrap();
/// assert_eq!(first, again);
/// assert_eq!(cache.access_count(2024), Some(2));
/// ```
#[derive(Debug)]
pub struct HolidayCache {
    state: Mutex<CacheState>,
    max_size: usize,
}

impl Default for HolidayCache {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayCache {
    /// Create a cache holding up to [`DEFAULT_MAX_SIZE`] years.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    /// Create a cache holding up to `max_size` years.
    pub fn with_max_size(max_size: usize) -> Result<Self> {
        ensure!(max_size > 0, "cache size must be positive");
        Ok(Self {
            state: Mutex::new(CacheState::default()),
            max_size,
        })
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // no panics happen while the state is half-updated, so a poisoned
        // lock still guards a consistent cache
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cached holidays for `year`, or `None` on a miss.
    ///
    /// A hit marks the year most recently used and bumps its access count;
    /// a miss changes nothing.
    pub fn get(&self, year: i32) -> Result<Option<Arc<[Holiday]>>> {
        validate_year(year)?;
        let hit = self.lock().touch(year);
        tracing::trace!(year, hit = hit.is_some(), "holiday cache lookup");
        Ok(hit)
    }

    /// Store `holidays` for `year` and return the frozen list.
    ///
    /// Replaces any previous list for `year`.  If `year` is new and the cache
    /// is full, one entry is evicted first.
    pub fn put(&self, year: i32, holidays: Vec<Holiday>) -> Result<Arc<[Holiday]>> {
        validate_year(year)?;
        Ok(self.lock().insert(year, holidays.into(), self.max_size))
    }

    /// Cached holidays for `year`, computing and storing them on a miss.
    ///
    /// The computation runs under the cache lock, so concurrent callers
    /// asking for the same year compute it once.
    pub fn get_or_compute(&self, year: i32, engine: &HolidayEngine) -> Result<Arc<[Holiday]>> {
        validate_year(year)?;
        let mut state = self.lock();
        if let Some(holidays) = state.touch(year) {
            tracing::trace!(year, "holiday cache hit");
            return Ok(holidays);
        }
        tracing::trace!(year, "holiday cache miss");
        let holidays = engine.holidays_in_year(year)?;
        Ok(state.insert(year, holidays.into(), self.max_size))
    }

    /// Drop `year`.  Returns `true` if it was cached.
    pub fn invalidate(&self, year: i32) -> Result<bool> {
        validate_year(year)?;
        let removed = self.lock().remove(year).is_some();
        if removed {
            tracing::debug!(year, "invalidated holiday cache entry");
        }
        Ok(removed)
    }

    /// Drop every entry.
    pub fn invalidate_all(&self) {
        let mut state = self.lock();
        let cleared = state.entries.len();
        *state = CacheState::default();
        tracing::debug!(cleared, "invalidated holiday cache");
    }

    /// Number of cached years.
    pub fn size(&self) -> usize {
        self.lock().entries.len()
    }

    /// Maximum number of cached years.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Cached years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.lock().entries.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// Cached years from least to most recently touched.
    pub fn years_by_recency(&self) -> Vec<i32> {
        self.lock().by_recency().map(|(year, _)| year).collect()
    }

    /// How often `year` has been touched since it was cached.
    pub fn access_count(&self, year: i32) -> Option<u64> {
        self.lock().entries.get(&year).map(|e| e.access_count)
    }

    /// Size, capacity, hottest year, and a rough memory estimate.
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        let most_accessed_year = state
            .by_recency()
            .max_by_key(|(_, e)| e.access_count)
            .map(|(year, _)| year);
        let estimated_bytes = state
            .entries
            .values()
            .map(|e| {
                size_of::<i32>()
                    + size_of::<Entry>()
                    + e.holidays.len() * size_of::<Holiday>()
                    + e.holidays.iter().map(|h| h.name().len()).sum::<usize>()
            })
            .sum();
        CacheStats {
            size: state.entries.len(),
            max_size: self.max_size,
            most_accessed_year,
            estimated_bytes,
        }
    }
}

fn validate_year(year: i32) -> Result<()> {
    ensure!(year > 0, "cache year must be positive, got {year}");
    Ok(())
}
