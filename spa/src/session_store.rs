use std::ops::Deref;
use std::rc::Rc;

use shared::{Claims, SessionAction, SessionState, TokenStorage, Transition};
use yew::prelude::*;

use crate::token_storage;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginStore {
    pub state: SessionState,
}

impl Deref for LoginStore {
    type Target = SessionState;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Reducible for LoginStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = self.state.clone().reduce(action);
        if state == self.state {
            return self;
        }
        Rc::new(LoginStore { state })
    }
}

pub type SessionContext = UseReducerHandle<LoginStore>;
pub type SessionDispatcher = UseReducerDispatcher<LoginStore>;

#[derive(PartialEq, Properties)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(LoginProvider)]
pub fn login_provider(props: &Props) -> Html {
    let store = use_reducer(LoginStore::default);

    html! {
        <ContextProvider<SessionContext> context={store}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session must be called under a LoginProvider")
}

pub fn login(dispatcher: &SessionDispatcher, token: String, claims: Claims) {
    token_storage::write_token(&token);
    log::info!("User logged in, roles={:?}", claims.role_names());
    dispatcher.dispatch(SessionAction::Login { token, claims });
}

pub fn logout(dispatcher: &SessionDispatcher) {
    log::info!("User logged out");
    token_storage::remove_token();
    dispatcher.dispatch(SessionAction::Logout);
}

/// Applies a transition decided by the token validator.
pub fn apply(dispatcher: &SessionDispatcher, transition: Transition) {
    if transition.token_storage == TokenStorage::Remove {
        token_storage::remove_token();
    }
    dispatcher.dispatch(transition.action);
}
