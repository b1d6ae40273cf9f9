use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(PartialEq, Default, Copy, Clone, Debug)]
pub enum InputType {
    #[default]
    Text,
    Password,
}

impl InputType {
    fn as_type(&self) -> AttrValue {
        match self {
            Self::Text => "text".into(),
            Self::Password => "password".into(),
        }
    }
}

#[derive(PartialEq, Properties, Default, Debug)]
pub struct Props {
    pub id: AttrValue,
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub input_type: InputType,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    pub on_change: Callback<String>,
}

#[function_component(InputText)]
pub fn input_text(props: &Props) -> Html {
    let on_input = {
        let callback = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target() {
                let value = target.unchecked_into::<HtmlInputElement>().value();
                callback.emit(value);
            }
        })
    };

    html! {
        <input
            id={props.id.clone()}
            name={props.name.clone()}
            type={props.input_type.as_type()}
            placeholder={props.placeholder.clone()}
            autocomplete={props.autocomplete.clone()}
            class={props.class.clone()}
            oninput={on_input} />
    }
}
