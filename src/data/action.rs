use crate::api::ApiError;
use crate::model::{Movie, Review};

/// Transitions owned by the data slice. Each replaces one field.
#[derive(Debug, Clone, PartialEq)]
pub enum DataAction {
    LoadMovies(Vec<Movie>),
    LoadPromoMovie(Movie),
    LoadActiveMovieReviews(Vec<Review>),
    SetMaxMoviesCount(Option<usize>),
    SetDataError(Option<ApiError>),
}
