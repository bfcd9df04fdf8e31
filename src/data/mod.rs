//! Data slice: server-sourced catalog state and its operations.

mod action;
mod operations;
mod reducer;
mod state;

pub use action::DataAction;
pub use operations::{
    load_active_movie_reviews, load_movies, load_promo_movie, send_review, ReviewForm,
    ReviewPayload,
};
pub use reducer::DataReducer;
pub use state::DataState;
