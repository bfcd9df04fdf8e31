use crate::application::state::Page;
use crate::model::Movie;

/// Transitions owned by the application slice.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationAction {
    ChangeGenre(String),
    ChangeActiveMovie(Option<Movie>),
    ChangeActivePage(Page),
    IncrementVisibleMoviesCount(usize),
    ResetVisibleMoviesCount,
}
