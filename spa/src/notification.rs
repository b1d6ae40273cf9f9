use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

const AUTO_CLOSE_MILLIS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "text-bg-info",
            ToastLevel::Warning => "text-bg-warning",
            ToastLevel::Error => "text-bg-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Toasts {
    next_id: u32,
    pub items: Vec<Toast>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastAction {
    Push(ToastLevel, String),
    Dismiss(u32),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            ToastAction::Push(level, message) => {
                state.items.push(Toast {
                    id: state.next_id,
                    level,
                    message,
                });
                state.next_id = state.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => {
                state.items.retain(|toast| toast.id != id);
            }
        }
        Rc::new(state)
    }
}

/// Handle handed to components that need to tell the user something.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<Toasts>,
}

impl Notifier {
    pub fn info(&self, message: impl Into<String>) {
        self.dispatcher
            .dispatch(ToastAction::Push(ToastLevel::Info, message.into()));
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.dispatcher
            .dispatch(ToastAction::Push(ToastLevel::Warning, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.dispatcher
            .dispatch(ToastAction::Push(ToastLevel::Error, message.into()));
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("use_notifier must be called under a ToastProvider")
}

#[derive(PartialEq, Properties)]
pub struct ProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ProviderProps) -> Html {
    let toasts = use_reducer(Toasts::default);
    let notifier = Notifier {
        dispatcher: toasts.dispatcher(),
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            {props.children.clone()}
            <div class="toast-container position-fixed bottom-0 end-0 p-3">
                { for toasts.items.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                })}
            </div>
        </ContextProvider<Notifier>>
    }
}

#[derive(PartialEq, Properties)]
struct ToastProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_timeout(move || on_dismiss.emit(id), AUTO_CLOSE_MILLIS);
    }

    let on_close_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", "show", "align-items-center", "border-0", props.toast.level.class())} role="alert">
            <div class="d-flex">
                <div class="toast-body">{&props.toast.message}</div>
                <button type="button" class="btn-close me-2 m-auto" onclick={on_close_click}></button>
            </div>
        </div>
    }
}
