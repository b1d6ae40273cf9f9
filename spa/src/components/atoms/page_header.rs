use yew::prelude::*;

#[derive(PartialEq, Properties)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: AttrValue,
}

#[function_component(PageHeader)]
pub fn page_header(props: &Props) -> Html {
    html! {
        <div class="mb-4">
            <h1 class="h3">{props.title.clone()}</h1>
            if !props.subtitle.is_empty() {
                <p class="text-muted">{props.subtitle.clone()}</p>
            }
        </div>
    }
}
