use shared::{Access, RoleGuard};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::composite::responsive_drawer::ResponsiveDrawer;
use crate::components::guards::{
    OnlyAdminOrExamHeadRoute, OnlyStudentRoute, OnlyTeacherRoute, ProtectedRoute,
};
use crate::pages::{
    admin::{AcademicDivisions, AddCourses, AdminMarks, CreateBatch, ListUsers, ViewStudents, ViewTeachers},
    common::{Dashboard, Profile, Settings},
    login::Login,
    not_found::NotFound,
    student::{Marks, Syllabus},
    teacher::{AddModifyMarks, ViewTeacherCourses},
};

#[derive(Debug, Clone, Copy, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/profile")]
    Profile,
    #[at("/settings")]
    Settings,
    #[at("/marks")]
    Marks,
    #[at("/syllabus")]
    Syllabus,
    #[at("/teacherCourses")]
    TeacherCourses,
    #[at("/addmarks")]
    AddMarks,
    #[at("/users")]
    Users,
    #[at("/students")]
    Students,
    #[at("/teachers")]
    Teachers,
    #[at("/addcourses")]
    AddCourses,
    #[at("/divisions")]
    Divisions,
    #[at("/createbatch")]
    CreateBatch,
    #[at("/adminmarks")]
    AdminMarks,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Pages reachable from the side navigation, in display order.
    pub const NAVIGATION: [Route; 14] = [
        Route::Dashboard,
        Route::Profile,
        Route::Marks,
        Route::Syllabus,
        Route::TeacherCourses,
        Route::AddMarks,
        Route::Users,
        Route::Students,
        Route::Teachers,
        Route::AddCourses,
        Route::Divisions,
        Route::CreateBatch,
        Route::AdminMarks,
        Route::Settings,
    ];

    pub fn access(&self) -> Access {
        match self {
            Route::Login | Route::NotFound => Access::Public,
            Route::Dashboard | Route::Profile | Route::Settings => Access::Authenticated,
            Route::Marks | Route::Syllabus => Access::Role(RoleGuard::OnlyStudent),
            Route::TeacherCourses | Route::AddMarks => Access::Role(RoleGuard::OnlyTeacher),
            Route::Users
            | Route::Students
            | Route::Teachers
            | Route::AddCourses
            | Route::Divisions
            | Route::CreateBatch
            | Route::AdminMarks => Access::Role(RoleGuard::OnlyAdminOrExamHead),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Profile => "Profile",
            Route::Settings => "Settings",
            Route::Marks => "Marks",
            Route::Syllabus => "Syllabus",
            Route::TeacherCourses => "My Courses",
            Route::AddMarks => "Add / Modify Marks",
            Route::Users => "Users",
            Route::Students => "Students",
            Route::Teachers => "Teachers",
            Route::AddCourses => "Courses",
            Route::Divisions => "Academic Divisions",
            Route::CreateBatch => "Create Batch",
            Route::AdminMarks => "Marks Overview",
            Route::NotFound => "Not Found",
        }
    }
}

pub fn switch(route: Route) -> Html {
    let page = match route {
        Route::Login => return html! { <Login /> },
        Route::NotFound => return html! { <NotFound /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Profile => html! { <Profile /> },
        Route::Settings => html! { <Settings /> },
        Route::Marks => html! { <Marks /> },
        Route::Syllabus => html! { <Syllabus /> },
        Route::TeacherCourses => html! { <ViewTeacherCourses /> },
        Route::AddMarks => html! { <AddModifyMarks /> },
        Route::Users => html! { <ListUsers /> },
        Route::Students => html! { <ViewStudents /> },
        Route::Teachers => html! { <ViewTeachers /> },
        Route::AddCourses => html! { <AddCourses /> },
        Route::Divisions => html! { <AcademicDivisions /> },
        Route::CreateBatch => html! { <CreateBatch /> },
        Route::AdminMarks => html! { <AdminMarks /> },
    };

    let page = match route.access() {
        Access::Role(RoleGuard::OnlyStudent) => {
            html! { <OnlyStudentRoute>{page}</OnlyStudentRoute> }
        }
        Access::Role(RoleGuard::OnlyTeacher) => {
            html! { <OnlyTeacherRoute>{page}</OnlyTeacherRoute> }
        }
        Access::Role(RoleGuard::OnlyAdminOrExamHead) => {
            html! { <OnlyAdminOrExamHeadRoute>{page}</OnlyAdminOrExamHeadRoute> }
        }
        Access::Public | Access::Authenticated => page,
    };

    html! {
        <ProtectedRoute>
            <ResponsiveDrawer>
                {page}
            </ResponsiveDrawer>
        </ProtectedRoute>
    }
}

#[cfg(test)]
mod tests {
    use shared::{GuardOutcome, SessionState};

    use super::*;

    #[test]
    fn test_protected_paths_redirect_logged_out_users() {
        let state = SessionState::default();
        for route in Route::NAVIGATION {
            assert!(route.access().is_protected(), "route={route:?}");
            assert_eq!(
                route.access().evaluate(&state),
                GuardOutcome::RedirectToLogin,
                "route={route:?}"
            );
        }
    }

    #[test]
    fn test_login_and_not_found_are_public() {
        let state = SessionState::default();
        for route in [Route::Login, Route::NotFound] {
            assert_eq!(route.access(), Access::Public);
            assert_eq!(route.access().evaluate(&state), GuardOutcome::Render);
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::Login.to_path(), "/");
        assert_eq!(Route::TeacherCourses.to_path(), "/teacherCourses");
        assert_eq!(Route::AdminMarks.to_path(), "/adminmarks");
        assert_eq!(Route::recognize("/marks"), Some(Route::Marks));
        assert_eq!(Route::recognize("/createbatch"), Some(Route::CreateBatch));
    }

    #[test]
    fn test_role_pages_use_the_expected_guards() {
        assert_eq!(Route::Syllabus.access(), Access::Role(RoleGuard::OnlyStudent));
        assert_eq!(Route::AddMarks.access(), Access::Role(RoleGuard::OnlyTeacher));
        assert_eq!(
            Route::Divisions.access(),
            Access::Role(RoleGuard::OnlyAdminOrExamHead)
        );
        assert_eq!(Route::Settings.access(), Access::Authenticated);
    }
}
