mod common;

use common::make_movie;
use wtw::api::ApiError;
use wtw::application::ApplicationAction;
use wtw::data::{DataAction, DataReducer, DataState};
use wtw::model::Review;
use wtw::store::{Action, Reducer};

fn make_review(author: &str) -> Review {
    Review {
        author: author.to_string(),
        comment: "Discerning travellers will luxuriate.".to_string(),
        rating: 8.9,
        date: "2019-05-08T14:13:56.569Z".parse().unwrap(),
    }
}

#[test]
fn initial_state_is_unloaded() {
    let state = DataState::default();
    assert!(state.movies.is_none());
    assert!(state.promo_movie.is_none());
    assert!(state.max_movies_count.is_none());
    assert!(state.active_movie_reviews.is_empty());
    assert!(state.data_error.is_none());
}

#[test]
fn load_movies_replaces_catalog() {
    let movies = vec![make_movie(1, "Comedy"), make_movie(2, "Drama")];
    let state = DataReducer::reduce(
        DataState::default(),
        &DataAction::LoadMovies(movies.clone()).into(),
    );
    assert_eq!(state.movies, Some(movies));
}

#[test]
fn load_promo_movie_replaces_promo() {
    let promo = make_movie(7, "Comedy");
    let state = DataReducer::reduce(
        DataState::default(),
        &DataAction::LoadPromoMovie(promo.clone()).into(),
    );
    assert_eq!(state.promo_movie, Some(promo));
}

#[test]
fn load_active_movie_reviews_replaces_reviews() {
    let first = vec![make_review("Kate Muir")];
    let state = DataReducer::reduce(
        DataState::default(),
        &DataAction::LoadActiveMovieReviews(first).into(),
    );
    assert_eq!(state.active_movie_reviews.len(), 1);

    let second = vec![make_review("Bill Goodykoontz"), make_review("Amanda Greever")];
    let state = DataReducer::reduce(state, &DataAction::LoadActiveMovieReviews(second).into());
    assert_eq!(state.active_movie_reviews.len(), 2);
    assert_eq!(state.active_movie_reviews[0].author, "Bill Goodykoontz");
}

#[test]
fn set_max_movies_count_sets_and_clears() {
    let state = DataReducer::reduce(
        DataState::default(),
        &DataAction::SetMaxMoviesCount(Some(4)).into(),
    );
    assert_eq!(state.max_movies_count, Some(4));

    let state = DataReducer::reduce(state, &DataAction::SetMaxMoviesCount(None).into());
    assert_eq!(state.max_movies_count, None);
}

#[test]
fn set_data_error_sets_and_clears() {
    let state = DataReducer::reduce(
        DataState::default(),
        &DataAction::SetDataError(Some(ApiError::Unauthorized)).into(),
    );
    assert_eq!(state.data_error, Some(ApiError::Unauthorized));

    let state = DataReducer::reduce(state, &DataAction::SetDataError(None).into());
    assert!(state.data_error.is_none());
}

#[test]
fn foreign_actions_are_identity() {
    let before = DataState {
        movies: Some(vec![make_movie(1, "Comedy")]),
        data_error: Some(ApiError::NotFound),
        ..DataState::default()
    };

    let after = DataReducer::reduce(
        before.clone(),
        &Action::Application(ApplicationAction::ChangeGenre("Drama".to_string())),
    );
    assert_eq!(after, before);
}
