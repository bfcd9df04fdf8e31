use crate::store::{Action, Reducer};
use crate::user::action::UserAction;
use crate::user::state::UserState;

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;

    fn reduce(state: Self::State, action: &Action) -> Self::State {
        let Action::User(action) = action else {
            return state;
        };

        match action {
            UserAction::RequireAuthorization(status) => UserState {
                authorization_status: *status,
                ..state
            },
            UserAction::SetLoginError(error) => UserState {
                login_error: error.clone(),
                ..state
            },
        }
    }
}
