//! Generic fetch-state machinery shared by the per-entity services.
//!
//! One [`FetchCell`] adapts a one-shot "fetch the whole collection" call into
//! observable state: the current record list, a loading flag, and an error
//! slot. The cell moves Idle -> Loading -> Idle; on success the list is
//! replaced wholesale, on failure the error slot is set and the list keeps
//! its previous value.

use quicks_core::error::{QuicksError, Result};
use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, RwLock};

/// Point-in-time view of one fetch pipeline, as consumed by a UI layer.
///
/// The three slots are read one after another, not under a common lock, so a
/// snapshot taken while a fetch settles may mix old and new values. That
/// matches how the slots are polled individually.
#[derive(Debug, Clone, Serialize)]
pub struct FetchState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<QuicksError>,
}

/// Observable state around a collection fetch.
///
/// Overlapping [`run`](Self::run) calls are single-flighted: at most one
/// fetch is in flight per cell, and a call arriving while one is running
/// waits for that flight to settle instead of issuing a second request.
/// Sequential calls each fetch fresh.
pub struct FetchCell<T> {
    items: RwLock<Vec<T>>,
    error: RwLock<Option<QuicksError>>,
    loading: AtomicBool,
    flight: Mutex<()>,
}

impl<T: Clone> FetchCell<T> {
    /// Creates an empty cell: no records, not loading, no error.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            error: RwLock::new(None),
            loading: AtomicBool::new(false),
            flight: Mutex::new(()),
        }
    }

    /// Current record list (cloned snapshot).
    pub async fn items(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    /// True while a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Error recorded by the most recent failed fetch, if any. Cleared at
    /// the start of every new fetch.
    pub async fn error(&self) -> Option<QuicksError> {
        self.error.read().await.clone()
    }

    /// Snapshot of all three state slots.
    pub async fn snapshot(&self) -> FetchState<T> {
        FetchState {
            items: self.items().await,
            loading: self.loading(),
            error: self.error().await,
        }
    }

    /// Runs one fetch cycle.
    ///
    /// Sets the loading flag, clears the error slot, awaits `fetch`, then
    /// stores the result or the failure. The loading flag drops back to
    /// false on every exit path. Failures are recorded, never propagated;
    /// callers observe them through [`error`](Self::error).
    pub async fn run<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let Ok(_flight) = self.flight.try_lock() else {
            // Join the in-flight fetch: wait for it to release the gate,
            // then return and let the caller observe what it stored.
            drop(self.flight.lock().await);
            return;
        };

        let _loading = LoadingGuard::engage(&self.loading);
        self.error.write().await.take();

        match fetch().await {
            Ok(records) => {
                *self.items.write().await = records;
            }
            Err(err) => {
                tracing::warn!(error = %err, "collection fetch failed");
                *self.error.write().await = Some(err);
            }
        }
    }
}

impl<T: Clone> Default for FetchCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the loading flag true for exactly the lifetime of one fetch.
struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    fn engage(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
