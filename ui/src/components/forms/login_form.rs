use dioxus::prelude::*;

use crate::components::{
    forms::FormField,
    inputs::{Button, ButtonType, CheckBox, ControlledInput, InputType},
    layout::{Align, BoxLayout, Direction, Edges, Footer, Heading, Spacing},
};
use crate::features::login::*;
use crate::i18n::FormattedMessage;
use crate::utils::class_names::{class_names, element, modifier, roots};
use crate::{console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormProps {
    pub align: Option<Align>,
    #[props(into)]
    pub class: Option<String>,
    #[props(default)]
    pub default_values: DefaultValues,
    /// Message keys rendered in order under the fields; empty entries are skipped
    #[props(default)]
    pub errors: Vec<String>,
    pub forgot_password: Option<Element>,
    pub logo: Option<Element>,
    pub on_submit: Option<EventHandler<LoginCredentials>>,
    /// Show the remember-me check box
    #[props(default)]
    pub remember_me: bool,
    #[props(into)]
    pub secondary_text: Option<String>,
    #[props(into)]
    pub title: Option<String>,
    #[props(default)]
    pub username_type: InputType,
}

pub fn login_form_classes(class: Option<&str>, align: Option<Align>) -> String {
    let align_class = align
        .map(|align| modifier(roots::LOGIN_FORM, &format!("align-{}", align.as_str())))
        .unwrap_or_default();

    class_names(
        roots::LOGIN_FORM,
        [(class.unwrap_or_default().to_string(), true), (align_class, true)],
    )
}

pub fn username_label(username_type: InputType) -> &'static str {
    match username_type {
        InputType::Email => "Email",
        _ => "Username",
    }
}

pub fn footer_layout(align: Option<Align>) -> BoxLayout {
    BoxLayout::default()
        .with_direction(Direction::Column)
        .with_align(align)
        .with_pad(Edges::Sides {
            horizontal: None,
            vertical: Some(Spacing::Medium),
            between: Some(Spacing::Medium),
        })
}

/// Controlled credentials form.
///
/// Holds username, password and remember-me locally and hands the trimmed
/// values to `on_submit`. It never validates or sends anything itself; the
/// caller reports problems back through `errors`.
#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let defaults = props.default_values.clone();
    let mut state = use_signal(move || LoginFormState::new(&defaults));
    let mut attach = use_signal(AttachOnce::default);
    let on_submit = props.on_submit;

    let mut dispatch = move |action: LoginFormAction| {
        let next = state.peek().clone().reduce(action);
        state.set(next);
    };

    let submit = move || {
        let current = state.peek().clone();
        let called = submit_credentials(
            &current,
            on_submit.map(|handler| move |credentials| handler.call(credentials)),
        );
        if called {
            console_info!("[LoginForm] Submitted credentials (remember_me: {})", current.remember_me);
        } else {
            console_info!("[LoginForm] Submit ignored: no on_submit handler configured");
        }
    };

    let focus_username = move |event: MountedEvent| {
        if !attach.write().attach() {
            return;
        }
        spawn(async move {
            if let Err(e) = event.set_focus(true).await {
                console_warn!("[LoginForm] Could not focus username input: {:?}", e);
            }
        });
    };

    let classes = login_form_classes(props.class.as_deref(), props.align);
    let secondary_class = format!("{} secondary", element(roots::LOGIN_FORM, "secondary-text"));
    let current = state.read().clone();

    rsx! {
        form {
            class: "{classes}",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                submit();
            },

            div {
                class: element(roots::LOGIN_FORM, "header"),
                {props.logo}
                if let Some(title) = &props.title {
                    Heading { strong: true, "{title}" }
                }
                if let Some(text) = &props.secondary_text {
                    p {
                        class: "{secondary_class}",
                        "{text}"
                    }
                }
            }

            fieldset {
                FormField {
                    html_for: "username",
                    label: rsx! { FormattedMessage { id: username_label(props.username_type) } },
                    ControlledInput {
                        id: "username",
                        value: current.username.clone(),
                        input_type: props.username_type,
                        on_change: move |value: String| dispatch(LoginFormAction::SetUsername(value)),
                        on_mounted: focus_username,
                    }
                }
                FormField {
                    html_for: "password",
                    label: rsx! { FormattedMessage { id: "Password" } },
                    ControlledInput {
                        id: "password",
                        value: current.password.clone(),
                        input_type: InputType::Password,
                        on_change: move |value: String| dispatch(LoginFormAction::SetPassword(value)),
                    }
                }
                for (index, error) in visible_errors(&props.errors) {
                    div {
                        key: "{index}",
                        class: "error",
                        FormattedMessage { id: error }
                    }
                }
            }

            Footer {
                layout: footer_layout(props.align),
                class: modifier(roots::FOOTER, "small"),
                if props.remember_me {
                    CheckBox {
                        id: "remember-me",
                        checked: current.remember_me,
                        label: rsx! { FormattedMessage { id: "Remember me" } },
                        on_change: move |checked: bool| dispatch(LoginFormAction::SetRememberMe(checked)),
                    }
                }
                if on_submit.is_some() {
                    Button {
                        label: rsx! { FormattedMessage { id: "Log In" } },
                        button_type: ButtonType::Submit,
                        primary: true,
                        strong: true,
                        class: element(roots::LOGIN_FORM, "submit"),
                        on_click: move |event: MouseEvent| {
                            event.prevent_default();
                            submit();
                        },
                    }
                } else {
                    Button {
                        label: rsx! { FormattedMessage { id: "Log In" } },
                        button_type: ButtonType::Submit,
                        primary: true,
                        strong: true,
                        class: element(roots::LOGIN_FORM, "submit"),
                    }
                }
                {props.forgot_password}
            }
        }
    }
}
