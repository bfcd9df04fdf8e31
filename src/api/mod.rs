//! REST client for the catalog backend.
//!
//! Failures are converted into the `ApiError` taxonomy at this
//! boundary; nothing above it sees `reqwest` types.

mod client;
mod error;

pub use client::ApiClient;
pub use error::{ApiError, ValidationErrors};
