use crate::api::ApiError;
use crate::user::state::AuthorizationStatus;

/// Transitions owned by the user slice.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    RequireAuthorization(AuthorizationStatus),
    SetLoginError(Option<ApiError>),
}
