//! The composed state tree and its thread-safe container.
//!
//! The store is the only shared mutable resource in the core. Every
//! mutation goes through `dispatch`, which applies all three slice
//! reducers under one write lock, so a single dispatch is atomic from
//! the caller's perspective even when operation completions interleave.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::application::{ApplicationReducer, ApplicationState};
use crate::data::{DataReducer, DataState};
use crate::store::{Action, Reducer};
use crate::user::{UserReducer, UserState};

/// The full state tree: one field per slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub application: ApplicationState,
    pub data: DataState,
    pub user: UserState,
}

/// Thread-safe state container.
///
/// Uses a read-write lock: selectors and `state()` snapshots take read
/// locks, dispatches are exclusive. Cloning the store clones the handle,
/// not the state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
    reviews_epoch: Arc<AtomicU64>,
}

struct StoreInner {
    state: AppState,
    /// Every dispatched action, in order. Auditing and test aid.
    dispatch_log: Vec<Action>,
}

impl Store {
    /// Create a store with the fixed startup state.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store seeded with a prepared state tree.
    pub fn with_state(state: AppState) -> Self {
        let inner = StoreInner {
            state,
            dispatch_log: Vec::new(),
        };
        Self {
            inner: Arc::new(RwLock::new(inner)),
            reviews_epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Apply an action to every slice reducer.
    ///
    /// The three reducers run under a single write lock; no reader can
    /// observe a partially-applied action.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let action = action.into();
        tracing::trace!(action = ?action, "dispatch");

        let mut inner = self.inner.write();
        let state = std::mem::take(&mut inner.state);
        inner.state = AppState {
            application: ApplicationReducer::reduce(state.application, &action),
            data: DataReducer::reduce(state.data, &action),
            user: UserReducer::reduce(state.user, &action),
        };
        inner.dispatch_log.push(action);
    }

    /// Snapshot the full state tree.
    pub fn state(&self) -> AppState {
        self.inner.read().state.clone()
    }

    /// Run a pure projection against the current state.
    ///
    /// This is how selectors are evaluated without cloning the tree.
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.inner.read().state)
    }

    /// Every action dispatched so far, in dispatch order.
    pub fn dispatch_log(&self) -> Vec<Action> {
        self.inner.read().dispatch_log.clone()
    }

    /// Start a reviews request, superseding any still in flight.
    ///
    /// The returned ticket stays current until the next call. A
    /// completion holding a superseded ticket must drop its dispatches:
    /// the user has navigated on and a late response would clobber the
    /// newer movie's reviews.
    pub fn begin_reviews_request(&self) -> ReviewsTicket {
        let seq = self.reviews_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        ReviewsTicket {
            epoch: Arc::clone(&self.reviews_epoch),
            seq,
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle identifying one reviews request among its successors.
pub struct ReviewsTicket {
    epoch: Arc<AtomicU64>,
    seq: u64,
}

impl ReviewsTicket {
    /// Whether this request is still the latest one issued.
    pub fn is_current(&self) -> bool {
        self.epoch.load(Ordering::SeqCst) == self.seq
    }
}
