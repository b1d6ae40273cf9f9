//! Route guards. They keep users away from pages they cannot use; the
//! backend still checks every request on its own.

use shared::{Access, GuardOutcome, RoleGuard};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session_store::use_session;

#[derive(PartialEq, Properties)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &Props) -> Html {
    let session = use_session();

    match Access::Authenticated.evaluate(&session.state) {
        GuardOutcome::Render => props.children.clone(),
        GuardOutcome::RedirectToLogin | GuardOutcome::Forbidden => {
            html! { <Redirect<Route> to={Route::Login} /> }
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct RoleRouteProps {
    pub guard: RoleGuard,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(RoleRoute)]
pub fn role_route(props: &RoleRouteProps) -> Html {
    let session = use_session();

    match Access::Role(props.guard).evaluate(&session.state) {
        GuardOutcome::Render => props.children.clone(),
        GuardOutcome::RedirectToLogin => html! { <Redirect<Route> to={Route::Login} /> },
        GuardOutcome::Forbidden => {
            let permitted = props
                .guard
                .permitted_roles()
                .iter()
                .map(|role| role.label())
                .collect::<Vec<_>>()
                .join(" or ");
            log::warn!(
                "Page blocked, current_role={:?}, permitted={permitted}",
                session.roles.current_role
            );
            html! {
                <div class="alert alert-warning" role="alert">
                    <h4 class="alert-heading">{"You are not allowed to view this page"}</h4>
                    <p>{format!("This page is only available to the {permitted} role.")}</p>
                    <Link<Route> to={Route::Dashboard} classes={classes!("alert-link")}>{"Back to the dashboard"}</Link<Route>>
                </div>
            }
        }
    }
}

#[function_component(OnlyStudentRoute)]
pub fn only_student_route(props: &Props) -> Html {
    html! { <RoleRoute guard={RoleGuard::OnlyStudent}>{props.children.clone()}</RoleRoute> }
}

#[function_component(OnlyTeacherRoute)]
pub fn only_teacher_route(props: &Props) -> Html {
    html! { <RoleRoute guard={RoleGuard::OnlyTeacher}>{props.children.clone()}</RoleRoute> }
}

#[function_component(OnlyAdminOrExamHeadRoute)]
pub fn only_admin_or_exam_head_route(props: &Props) -> Html {
    html! { <RoleRoute guard={RoleGuard::OnlyAdminOrExamHead}>{props.children.clone()}</RoleRoute> }
}
