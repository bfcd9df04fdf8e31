//! User slice: session state and authentication operations.

mod action;
mod operations;
mod reducer;
mod state;

pub use action::UserAction;
pub use operations::{check_auth, login, AuthPayload};
pub use reducer::UserReducer;
pub use state::{AuthorizationStatus, UserState};
