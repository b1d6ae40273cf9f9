use serde_json::Value;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::courses_api;
use crate::components::atoms::page_header::PageHeader;
use crate::notification::use_notifier;
use crate::session_store::use_session;

#[function_component(ListUsers)]
pub fn list_users() -> Html {
    html! {
        <PageHeader title="Users" subtitle="Accounts registered in the portal." />
    }
}

#[function_component(ViewStudents)]
pub fn view_students() -> Html {
    html! {
        <PageHeader title="Students" subtitle="Students enrolled, grouped by batch." />
    }
}

#[function_component(ViewTeachers)]
pub fn view_teachers() -> Html {
    html! {
        <PageHeader title="Teachers" subtitle="Teaching staff and their courses." />
    }
}

#[function_component(AddCourses)]
pub fn add_courses() -> Html {
    html! {
        <PageHeader title="Courses" subtitle="Create courses and assign them to teachers." />
    }
}

#[function_component(AcademicDivisions)]
pub fn academic_divisions() -> Html {
    html! {
        <PageHeader title="Academic Divisions" subtitle="Programmes, departments and semesters." />
    }
}

#[function_component(CreateBatch)]
pub fn create_batch() -> Html {
    html! {
        <PageHeader title="Create Batch" subtitle="Open a new batch of students." />
    }
}

#[derive(Clone, PartialEq, Debug)]
enum Weightage {
    Loading,
    Loaded(Vec<Value>),
    Failed,
}

/// Column names of a row set, in first-seen order.
fn columns(rows: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        if let Value::Object(fields) = row {
            for key in fields.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

fn cell(row: &Value, column: &str) -> String {
    match row.get(column) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[function_component(AdminMarks)]
pub fn admin_marks() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let weightage = use_state(|| Weightage::Loading);

    {
        let weightage = weightage.clone();
        let token = session.bearer_token().map(str::to_owned);
        use_effect_with(token, move |token| {
            if let Some(token) = token.clone() {
                spawn_local(async move {
                    match courses_api::get_mark_weightage(&token).await {
                        Ok(rows) => weightage.set(Weightage::Loaded(rows)),
                        Err(error) => {
                            log::error!("Fail to fetch mark weightage, error={error}");
                            notifier.error("Could not load the mark weightage.");
                            weightage.set(Weightage::Failed);
                        }
                    }
                });
            }
        });
    }

    let content = match &*weightage {
        Weightage::Loading => html! { <div class="spinner-border" role="status"></div> },
        Weightage::Failed => html! {
            <div class="alert alert-danger" role="alert">{"Mark weightage is not available."}</div>
        },
        Weightage::Loaded(rows) if rows.is_empty() => html! {
            <p class="text-muted">{"No mark weightage defined yet."}</p>
        },
        Weightage::Loaded(rows) => {
            let columns = columns(rows);
            html! {
                <table class="table table-striped">
                    <thead>
                        <tr>
                            { for columns.iter().map(|column| html! { <th scope="col">{column.clone()}</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for rows.iter().map(|row| html! {
                            <tr>
                                { for columns.iter().map(|column| html! { <td>{cell(row, column)}</td> }) }
                            </tr>
                        })}
                    </tbody>
                </table>
            }
        }
    };

    html! {
        <>
            <PageHeader title="Marks Overview" subtitle="Mark weightage per course." />
            {content}
        </>
    }
}
