use yew::prelude::*;

use crate::components::atoms::page_header::PageHeader;

#[function_component(ViewTeacherCourses)]
pub fn view_teacher_courses() -> Html {
    html! {
        <PageHeader title="My Courses" subtitle="Courses assigned to you." />
    }
}

#[function_component(AddModifyMarks)]
pub fn add_modify_marks() -> Html {
    html! {
        <PageHeader title="Add / Modify Marks" subtitle="Record marks for the students of your courses." />
    }
}
