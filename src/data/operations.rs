//! Async operations of the data slice.
//!
//! Each operation suspends once at the network boundary, then dispatches
//! its cascade of actions in a fixed order. Catalog and promo loads
//! propagate errors to the caller; reviews and review submission convert
//! them into `data_error` state instead.

use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::application::{ApplicationAction, Page};
use crate::data::action::DataAction;
use crate::model::{create_movie, create_movies, create_reviews, RawMovie, RawReview};
use crate::navigation::{AppRoute, Navigator};
use crate::selectors::get_active_movie;
use crate::store::Store;

/// Handle to the review submission form.
///
/// The UI passes this in so the operation can disable the form for the
/// duration of the call. The disable happens before the request starts
/// and is reversed once it settles, success or failure.
pub trait ReviewForm: Send + Sync {
    fn set_disabled(&self, disabled: bool);
}

/// Input for `send_review`, validated by the UI layer beforehand.
#[derive(Debug, Clone)]
pub struct ReviewPayload {
    pub movie_id: u64,
    pub rating: u8,
    pub comment: String,
}

#[derive(Serialize)]
struct ReviewRequest<'a> {
    rating: u8,
    comment: &'a str,
}

/// Load the full catalog and replace `movies`.
pub async fn load_movies(store: &Store, api: &ApiClient) -> Result<(), ApiError> {
    let raw: Vec<RawMovie> = api.get("/films").await?;
    store.dispatch(DataAction::LoadMovies(create_movies(raw)));
    Ok(())
}

/// Load the featured movie and land the UI on the main page.
///
/// The cascade spans two slices and its order is a contract: promo
/// loaded, then active movie set, then page set.
pub async fn load_promo_movie(store: &Store, api: &ApiClient) -> Result<(), ApiError> {
    let raw: RawMovie = api.get("/films/promo").await?;
    let movie = create_movie(raw);

    store.dispatch(DataAction::LoadPromoMovie(movie.clone()));
    store.dispatch(ApplicationAction::ChangeActiveMovie(Some(movie)));
    store.dispatch(ApplicationAction::ChangeActivePage(Page::Main));
    Ok(())
}

/// Load the reviews of one movie.
///
/// Failures become `data_error` state and are never re-raised. A
/// completion superseded by a newer reviews request dispatches nothing:
/// the response belongs to a movie the user already navigated away from.
pub async fn load_active_movie_reviews(store: &Store, api: &ApiClient, movie_id: u64) {
    let ticket = store.begin_reviews_request();

    match api.get::<Vec<RawReview>>(&format!("/comments/{movie_id}")).await {
        Ok(raw) => {
            if !ticket.is_current() {
                tracing::debug!(movie_id, "dropping stale reviews response");
                return;
            }
            store.dispatch(DataAction::LoadActiveMovieReviews(create_reviews(raw)));
            store.dispatch(DataAction::SetDataError(None));
        }
        Err(error) => {
            if !ticket.is_current() {
                tracing::debug!(movie_id, "dropping stale reviews failure");
                return;
            }
            tracing::warn!(movie_id, error = %error, "loading reviews failed");
            store.dispatch(DataAction::SetDataError(Some(error)));
        }
    }
}

/// Submit a review for one movie.
///
/// The form is disabled before the request starts; the guard re-enables
/// it on every exit path, so disable/enable calls stay balanced. On
/// success the UI is routed to the details page of the *current* active
/// movie (selector read at completion time, not at dispatch time) and
/// the returned reviews replace the active set.
pub async fn send_review(
    store: &Store,
    api: &ApiClient,
    navigator: &dyn Navigator,
    form: &dyn ReviewForm,
    payload: ReviewPayload,
) {
    form.set_disabled(true);
    let _form = scopeguard::guard(form, |form| form.set_disabled(false));

    let body = ReviewRequest {
        rating: payload.rating,
        comment: &payload.comment,
    };
    let result = api
        .post::<_, Vec<RawReview>>(&format!("/comments/{}", payload.movie_id), &body)
        .await;

    match result {
        Ok(raw) => {
            let reviews = create_reviews(raw);
            if let Some(id) = store.select(|state| get_active_movie(state).map(|movie| movie.id)) {
                navigator.push(&AppRoute::Film(id));
            }
            store.dispatch(ApplicationAction::ChangeActivePage(Page::MovieDetails));
            store.dispatch(DataAction::LoadActiveMovieReviews(reviews));
            store.dispatch(DataAction::SetDataError(None));
        }
        Err(error) => {
            tracing::warn!(movie_id = payload.movie_id, error = %error, "sending review failed");
            store.dispatch(DataAction::SetDataError(Some(error)));
        }
    }
}
