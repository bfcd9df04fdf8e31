use crate::application::action::ApplicationAction;
use crate::application::state::{ApplicationState, STARTUP_VISIBLE_MOVIES_COUNT};
use crate::store::{Action, Reducer};

pub struct ApplicationReducer;

impl Reducer for ApplicationReducer {
    type State = ApplicationState;

    fn reduce(state: Self::State, action: &Action) -> Self::State {
        let Action::Application(action) = action else {
            return state;
        };

        match action {
            ApplicationAction::ChangeGenre(genre) => ApplicationState {
                genre: genre.clone(),
                ..state
            },
            ApplicationAction::ChangeActiveMovie(movie) => ApplicationState {
                active_movie: movie.clone(),
                ..state
            },
            ApplicationAction::ChangeActivePage(page) => {
                // Re-dispatching the current page is identity so that
                // prev_page never churns on no-op navigation.
                if *page == state.active_page {
                    return state;
                }
                ApplicationState {
                    prev_page: state.active_page,
                    active_page: *page,
                    ..state
                }
            }
            ApplicationAction::IncrementVisibleMoviesCount(step) => ApplicationState {
                visible_movies_count: state.visible_movies_count + step,
                ..state
            },
            ApplicationAction::ResetVisibleMoviesCount => ApplicationState {
                visible_movies_count: STARTUP_VISIBLE_MOVIES_COUNT,
                ..state
            },
        }
    }
}
