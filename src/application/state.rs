use crate::model::Movie;

/// Genre filter label that shows the whole catalog.
pub const DEFAULT_GENRE: &str = "All genres";

/// Number of catalog cards visible at startup.
pub const STARTUP_VISIBLE_MOVIES_COUNT: usize = 8;

/// Number of cards added per "show more" click.
pub const VISIBLE_MOVIES_COUNT_STEP: usize = 8;

/// Pages the application can display.
///
/// Boots on `Error`; the promo-load cascade is what first lands on
/// `Main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    Main,
    MovieDetails,
    AddReview,
    SignIn,
    Player,
    #[default]
    Error,
}

/// Transient UI state.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationState {
    /// Current genre filter label.
    pub genre: String,
    /// The movie currently displayed, by value.
    pub active_movie: Option<Movie>,
    pub active_page: Page,
    /// Page to return to. Updated only when `active_page` actually
    /// changes; no-op page transitions leave it alone.
    pub prev_page: Page,
    /// Pagination cursor for the catalog.
    pub visible_movies_count: usize,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self {
            genre: DEFAULT_GENRE.to_string(),
            active_movie: None,
            active_page: Page::default(),
            prev_page: Page::default(),
            visible_movies_count: STARTUP_VISIBLE_MOVIES_COUNT,
        }
    }
}
