//! Browser-location routing seam.
//!
//! Routes are string templates with an `:id` placeholder; rendering a
//! route substitutes the movie id. The core never touches a real
//! browser location: it pushes through the `Navigator` capability and
//! the consuming UI decides what that means.

/// Placeholder substituted with a movie id.
const ID_PLACEHOLDER: &str = ":id";

const MAIN_ROUTE: &str = "/";
const SIGN_IN_ROUTE: &str = "/login";
const FILM_ROUTE: &str = "/films/:id";
const ADD_REVIEW_ROUTE: &str = "/films/:id/review";
const PLAYER_ROUTE: &str = "/player/:id";

/// Addressable locations of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Main,
    SignIn,
    Film(u64),
    AddReview(u64),
    Player(u64),
}

impl AppRoute {
    /// Render the route's path, substituting the id placeholder.
    pub fn path(&self) -> String {
        match self {
            AppRoute::Main => MAIN_ROUTE.to_string(),
            AppRoute::SignIn => SIGN_IN_ROUTE.to_string(),
            AppRoute::Film(id) => fill(FILM_ROUTE, *id),
            AppRoute::AddReview(id) => fill(ADD_REVIEW_ROUTE, *id),
            AppRoute::Player(id) => fill(PLAYER_ROUTE, *id),
        }
    }
}

fn fill(template: &str, id: u64) -> String {
    template.replace(ID_PLACEHOLDER, &id.to_string())
}

/// Imperative capability to change the browser location.
pub trait Navigator: Send + Sync {
    fn push(&self, route: &AppRoute);
}

/// Navigator for headless runs: records pushes in the log only.
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn push(&self, route: &AppRoute) {
        tracing::info!(path = %route.path(), "navigate");
    }
}
