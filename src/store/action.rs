//! The closed union of every state transition.

use crate::application::ApplicationAction;
use crate::data::DataAction;
use crate::user::UserAction;

/// One dispatched state transition.
///
/// Actions represent:
/// - user actions forwarded by the UI layer (filter change, navigation)
/// - completions of async operations (loaded data, errors)
///
/// Each variant wraps the action enum of the slice that owns the
/// transition; the other slices treat it as a no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Application(ApplicationAction),
    Data(DataAction),
    User(UserAction),
}

impl From<ApplicationAction> for Action {
    fn from(action: ApplicationAction) -> Self {
        Action::Application(action)
    }
}

impl From<DataAction> for Action {
    fn from(action: DataAction) -> Self {
        Action::Data(action)
    }
}

impl From<UserAction> for Action {
    fn from(action: UserAction) -> Self {
        Action::User(action)
    }
}
