//! Pure projections over the composed state tree.
//!
//! Selectors are the read side of the core: no side effects, no locks
//! of their own. Evaluate them through `Store::select` or against a
//! snapshot.

use crate::api::ApiError;
use crate::application::DEFAULT_GENRE;
use crate::model::{Movie, Review};
use crate::store::AppState;
use crate::user::AuthorizationStatus;

/// Most genre filter entries shown, default label included.
const MAX_GENRES_COUNT: usize = 10;

pub fn get_movie_by_id(state: &AppState, id: u64) -> Option<&Movie> {
    state
        .data
        .movies
        .as_deref()
        .and_then(|movies| movies.iter().find(|movie| movie.id == id))
}

/// The catalog as the current filter and pagination show it: genre
/// filter first, then the server-imposed cap, then the visible-count
/// cursor.
pub fn get_movies_for_catalog(state: &AppState) -> Vec<Movie> {
    let Some(movies) = state.data.movies.as_deref() else {
        return Vec::new();
    };

    let genre = &state.application.genre;
    let filtered = movies
        .iter()
        .filter(|movie| genre.as_str() == DEFAULT_GENRE || movie.genres.iter().any(|g| g == genre));

    let cap = state
        .data
        .max_movies_count
        .unwrap_or(usize::MAX)
        .min(state.application.visible_movies_count);

    filtered.take(cap).cloned().collect()
}

/// Filter labels for the catalog: the default label followed by the
/// distinct genres of the loaded movies, in first-seen order.
pub fn get_genres(state: &AppState) -> Vec<String> {
    let mut genres = vec![DEFAULT_GENRE.to_string()];

    if let Some(movies) = state.data.movies.as_deref() {
        for movie in movies {
            for genre in &movie.genres {
                if genres.len() == MAX_GENRES_COUNT {
                    return genres;
                }
                if !genres.contains(genre) {
                    genres.push(genre.clone());
                }
            }
        }
    }

    genres
}

pub fn get_active_movie_reviews(state: &AppState) -> &[Review] {
    &state.data.active_movie_reviews
}

pub fn get_data_error(state: &AppState) -> Option<&ApiError> {
    state.data.data_error.as_ref()
}

pub fn get_login_error(state: &AppState) -> Option<&ApiError> {
    state.user.login_error.as_ref()
}

pub fn get_promo_movie(state: &AppState) -> Option<&Movie> {
    state.data.promo_movie.as_ref()
}

pub fn get_visible_movies_count(state: &AppState) -> usize {
    state.application.visible_movies_count
}

pub fn get_active_movie(state: &AppState) -> Option<&Movie> {
    state.application.active_movie.as_ref()
}

pub fn get_authorization_status(state: &AppState) -> AuthorizationStatus {
    state.user.authorization_status
}
