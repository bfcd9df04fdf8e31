//! Application slice: transient UI state.
//!
//! Holds the active genre filter, the movie currently displayed, the
//! page pair used for back-navigation, and the pagination cursor.

mod action;
mod reducer;
mod state;

pub use action::ApplicationAction;
pub use reducer::ApplicationReducer;
pub use state::{
    ApplicationState, Page, DEFAULT_GENRE, STARTUP_VISIBLE_MOVIES_COUNT,
    VISIBLE_MOVIES_COUNT_STEP,
};
