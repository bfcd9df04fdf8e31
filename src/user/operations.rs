//! Async operations of the user slice.

use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::application::{ApplicationAction, Page, DEFAULT_GENRE};
use crate::data::DataAction;
use crate::navigation::{AppRoute, Navigator};
use crate::selectors::get_promo_movie;
use crate::store::Store;
use crate::user::action::UserAction;
use crate::user::state::AuthorizationStatus;
use crate::validation::validate_login;

/// Login credentials.
#[derive(Debug, Clone)]
pub struct AuthPayload {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Check whether the current session is authorized.
///
/// Unlike every sibling operation this re-raises its failure instead of
/// converting it to state: the caller needs to tell "not logged in"
/// apart from "backend unreachable", and neither is a login error worth
/// rendering.
pub async fn check_auth(store: &Store, api: &ApiClient) -> Result<(), ApiError> {
    api.get::<serde_json::Value>("/login").await?;
    store.dispatch(UserAction::RequireAuthorization(AuthorizationStatus::Auth));
    Ok(())
}

/// Authenticate with email and password.
///
/// A locally-rejected email never reaches the API; it surfaces through
/// the same `SetLoginError` channel as a server failure. On success the
/// operation resets the browsing session: seven dispatches whose order
/// is the contract under test.
pub async fn login(store: &Store, api: &ApiClient, navigator: &dyn Navigator, auth: AuthPayload) {
    if let Err(error) = validate_login(&auth.email) {
        store.dispatch(UserAction::SetLoginError(Some(error)));
        return;
    }

    let body = LoginRequest {
        email: &auth.email,
        password: &auth.password,
    };

    match api.post::<_, serde_json::Value>("/login", &body).await {
        Ok(_) => {
            navigator.push(&AppRoute::Main);

            let promo = store.select(|state| get_promo_movie(state).cloned());
            store.dispatch(ApplicationAction::ChangeActivePage(Page::Main));
            store.dispatch(UserAction::RequireAuthorization(AuthorizationStatus::Auth));
            store.dispatch(UserAction::SetLoginError(None));
            store.dispatch(DataAction::SetMaxMoviesCount(None));
            store.dispatch(ApplicationAction::ChangeActiveMovie(promo));
            store.dispatch(ApplicationAction::ChangeGenre(DEFAULT_GENRE.to_string()));
            store.dispatch(ApplicationAction::ResetVisibleMoviesCount);
        }
        Err(error) => {
            tracing::warn!(error = %error, "login failed");
            store.dispatch(UserAction::SetLoginError(Some(error)));
        }
    }
}
