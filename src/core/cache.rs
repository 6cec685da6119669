//! Process-wide fallback cache for the last good player pool.
//!
//! Lifecycle: starts empty, is replaced wholesale after every successful
//! upstream refresh, and is only flagged stale (never cleared) when a refresh
//! fails. Writers swap in a new `Arc<PoolSnapshot>`; readers clone the `Arc`
//! under a short read lock and then work on an immutable snapshot, so a
//! concurrent refresh can never expose a half-built pool.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, RwLock,
    },
    time::{SystemTime, UNIX_EPOCH},
};

use crate::engine::pool::PlayerPool;

/// One published version of the player pool.
#[derive(Debug)]
pub struct PoolSnapshot {
    pub pool: Arc<PlayerPool>,
    /// Increments on every successful refresh.
    pub generation: u64,
    /// Seconds since the Unix epoch when this pool was fetched.
    pub fetched_at: u64,
    /// Set when the latest refresh failed and this pool is being served as a fallback.
    pub stale: bool,
}

impl PoolSnapshot {
    /// Seconds since this pool was fetched.
    pub fn age_secs(&self) -> u64 {
        now_secs().saturating_sub(self.fetched_at)
    }
}

#[derive(Debug, Default)]
pub struct PoolCache {
    current: RwLock<Option<Arc<PoolSnapshot>>>,
    generations: AtomicU64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl PoolCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, if any refresh has ever succeeded.
    pub fn snapshot(&self) -> Option<Arc<PoolSnapshot>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Publish a freshly normalized pool.
    pub fn replace(&self, pool: PlayerPool) -> Arc<PoolSnapshot> {
        let snapshot = Arc::new(PoolSnapshot {
            pool: Arc::new(pool),
            generation: self.generations.fetch_add(1, Ordering::SeqCst) + 1,
            fetched_at: now_secs(),
            stale: false,
        });
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Flag the current pool as a fallback. Returns the snapshot now being
    /// served, or `None` when there has never been a pool.
    pub fn mark_stale(&self) -> Option<Arc<PoolSnapshot>> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let existing = guard.as_ref()?;
        if existing.stale {
            return Some(Arc::clone(existing));
        }
        let stale = Arc::new(PoolSnapshot {
            pool: Arc::clone(&existing.pool),
            generation: existing.generation,
            fetched_at: existing.fetched_at,
            stale: true,
        });
        *guard = Some(Arc::clone(&stale));
        Some(stale)
    }
}
