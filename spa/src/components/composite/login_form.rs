use std::rc::Rc;

use yew::prelude::*;

use crate::components::atoms::input_text::{InputText, InputType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug, PartialEq, Default, Clone)]
pub struct LoginFormData {
    pub username: String,
    pub password: String,
}

impl LoginFormData {
    /// Problems blocking a submit, at most one per field.
    pub fn problems(&self) -> Vec<(LoginField, &'static str)> {
        let mut problems = Vec::new();
        if self.username.trim().is_empty() {
            problems.push((LoginField::Username, "Enter your user name"));
        }
        if self.password.is_empty() {
            problems.push((LoginField::Password, "Enter your password"));
        }
        problems
    }

    fn problem(&self, field: LoginField) -> Option<&'static str> {
        self.problems()
            .into_iter()
            .find(|(problem_field, _)| *problem_field == field)
            .map(|(_, message)| message)
    }
}

/// Problems stay hidden until the first submit attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginFormState {
    pub data: LoginFormData,
    pub attempted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginFormMessage {
    SetUsername(String),
    SetPassword(String),
    Attempt,
}

impl Reducible for LoginFormState {
    type Action = LoginFormMessage;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            LoginFormMessage::SetUsername(username) => state.data.username = username,
            LoginFormMessage::SetPassword(password) => state.data.password = password,
            LoginFormMessage::Attempt => state.attempted = true,
        }
        Rc::new(state)
    }
}

impl LoginFormState {
    fn visible_problem(&self, field: LoginField) -> Option<&'static str> {
        if self.attempted {
            self.data.problem(field)
        } else {
            None
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_login: Callback<LoginFormData>,
    /// Set while a login request is in flight; the form refuses to submit.
    #[prop_or_default]
    pub busy: bool,
}

fn input_classes(problem: Option<&'static str>) -> Classes {
    if problem.is_some() {
        classes!("form-control", "is-invalid")
    } else {
        classes!("form-control")
    }
}

#[function_component(LoginForm)]
pub fn login_form(props: &Props) -> Html {
    let form = use_reducer(LoginFormState::default);

    let on_username = {
        let dispatcher = form.dispatcher();
        Callback::from(move |username: String| {
            dispatcher.dispatch(LoginFormMessage::SetUsername(username))
        })
    };

    let on_password = {
        let dispatcher = form.dispatcher();
        Callback::from(move |password: String| {
            dispatcher.dispatch(LoginFormMessage::SetPassword(password))
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_login = props.on_login.clone();
        let busy = props.busy;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            form.dispatch(LoginFormMessage::Attempt);
            if busy {
                return;
            }
            if form.data.problems().is_empty() {
                on_login.emit(form.data.clone());
            }
        })
    };

    let username_problem = form.visible_problem(LoginField::Username);
    let password_problem = form.visible_problem(LoginField::Password);

    html! {
        <div class="d-flex justify-content-center align-items-center min-vh-100 bg-body-tertiary">
            <div class="card shadow-sm" style="width: 24rem;">
                <div class="card-body p-4">
                    <h1 class="h4 text-center mb-1">{ "Marks Portal" }</h1>
                    <p class="text-center text-muted mb-4">{ "Sign in with your college account" }</p>
                    <form onsubmit={on_submit} novalidate=true>
                        <div class="mb-3">
                            <label for="username" class="form-label">{ "User name" }</label>
                            <InputText
                                id="username"
                                name="username"
                                autocomplete="username"
                                class={input_classes(username_problem)}
                                input_type={InputType::Text}
                                on_change={on_username} />
                            if let Some(problem) = username_problem {
                                <div class="invalid-feedback">{problem}</div>
                            }
                        </div>
                        <div class="mb-4">
                            <label for="password" class="form-label">{ "Password" }</label>
                            <InputText
                                id="password"
                                name="password"
                                autocomplete="current-password"
                                class={input_classes(password_problem)}
                                input_type={InputType::Password}
                                on_change={on_password} />
                            if let Some(problem) = password_problem {
                                <div class="invalid-feedback">{problem}</div>
                            }
                        </div>
                        <button class="btn btn-primary w-100" type="submit" disabled={props.busy}>
                            if props.busy {
                                <span class="spinner-border spinner-border-sm me-2" aria-hidden="true"></span>
                                { "Signing in..." }
                            } else {
                                { "Sign in" }
                            }
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
