use crate::api::ApiError;

/// Whether the session is authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationStatus {
    Auth,
    #[default]
    NoAuth,
}

/// Session state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserState {
    pub authorization_status: AuthorizationStatus,
    /// Last login failure, or `None`.
    pub login_error: Option<ApiError>,
}
