use crate::data::action::DataAction;
use crate::data::state::DataState;
use crate::store::{Action, Reducer};

pub struct DataReducer;

impl Reducer for DataReducer {
    type State = DataState;

    fn reduce(state: Self::State, action: &Action) -> Self::State {
        let Action::Data(action) = action else {
            return state;
        };

        match action {
            DataAction::LoadMovies(movies) => DataState {
                movies: Some(movies.clone()),
                ..state
            },
            DataAction::LoadPromoMovie(movie) => DataState {
                promo_movie: Some(movie.clone()),
                ..state
            },
            DataAction::LoadActiveMovieReviews(reviews) => DataState {
                active_movie_reviews: reviews.clone(),
                ..state
            },
            DataAction::SetMaxMoviesCount(count) => DataState {
                max_movies_count: *count,
                ..state
            },
            DataAction::SetDataError(error) => DataState {
                data_error: error.clone(),
                ..state
            },
        }
    }
}
