//! Domain types and adapters for server payloads.
//!
//! Raw records arrive as JSON with server field names and string dates;
//! the adapters convert them into the internal model exactly once, at
//! the operation boundary. Adapted values are immutable and replaced
//! wholesale on reload.

mod movie;
mod review;

pub use movie::{create_movie, create_movies, Movie, RawMovie};
pub use review::{create_reviews, RawReview, Review};
