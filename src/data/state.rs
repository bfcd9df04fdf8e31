use crate::api::ApiError;
use crate::model::{Movie, Review};

/// Server-sourced data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataState {
    /// Full catalog, `None` until the first load completes.
    pub movies: Option<Vec<Movie>>,
    /// Featured movie, `None` until loaded.
    pub promo_movie: Option<Movie>,
    /// Cap on how many catalog cards may be shown, when set.
    pub max_movies_count: Option<usize>,
    /// Reviews of the active movie, refreshed per navigation.
    pub active_movie_reviews: Vec<Review>,
    /// Last error hit by a data operation.
    pub data_error: Option<ApiError>,
}
