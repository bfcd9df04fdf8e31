//! Unidirectional data-flow primitives.
//!
//! This module provides the action union, the reducer trait, and the
//! store that composes the three state slices.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Selectors
//!    ↑                               │
//!    └───────── operations ──────────┘
//! ```
//!
//! - **State**: immutable snapshot of one slice
//! - **Action**: closed union of every state transition
//! - **Reducer**: pure function that transforms a slice based on actions
//! - **Store**: holds the composed state tree and applies reducers atomically

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::{AppState, ReviewsTicket, Store};
