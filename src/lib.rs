//! State-management core of a movie-catalog single-page app.
//!
//! Three reducer-owned slices (application, data, user) composed into
//! one store, async operations that call the catalog REST API and
//! dispatch ordered cascades, and pure selectors for the read side.
//! Rendering is an external consumer: it reads through selectors and
//! dispatches actions and operations back in.

pub mod api;
pub mod application;
pub mod config;
pub mod data;
pub mod model;
pub mod navigation;
pub mod selectors;
pub mod store;
pub mod user;
pub mod util;
pub mod validation;
