use yew::prelude::*;

use crate::components::atoms::page_header::PageHeader;

#[function_component(Marks)]
pub fn marks() -> Html {
    html! {
        <PageHeader title="Marks" subtitle="Your marks for the current semester." />
    }
}

#[function_component(Syllabus)]
pub fn syllabus() -> Html {
    html! {
        <PageHeader title="Syllabus" subtitle="Courses and units of your batch." />
    }
}
