//! Input components: controlled text inputs, check boxes and buttons

use crate::utils::class_names::{class_names, element, modifier, roots};
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum InputType {
    Text,
    Password,
    #[default]
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ControlledInputProps {
    #[props(into)]
    pub id: String,
    pub value: String,
    pub input_type: InputType,
    #[props(into)]
    pub input_class: Option<String>,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
    pub on_mounted: Option<EventHandler<MountedEvent>>,
}

/// Input whose displayed value always comes from the caller's state.
#[component]
pub fn ControlledInput(props: ControlledInputProps) -> Element {
    let on_mounted = props.on_mounted;

    rsx! {
        input {
            id: "{props.id}",
            name: "{props.id}",
            class: props.input_class.clone(),
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value()),
            onmounted: move |event| {
                if let Some(handler) = on_mounted {
                    handler.call(event);
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CheckBoxProps {
    #[props(into)]
    pub id: String,
    pub checked: bool,
    pub label: Element,
    pub on_change: EventHandler<bool>,
}

#[component]
pub fn CheckBox(props: CheckBoxProps) -> Element {
    rsx! {
        label {
            class: roots::CHECK_BOX,
            r#for: "{props.id}",
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: element(roots::CHECK_BOX, "input"),
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |event| props.on_change.call(event.checked())
            }
            span {
                class: element(roots::CHECK_BOX, "label"),
                {props.label}
            }
        }
    }
}

#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    pub label: Element,
    #[props(default)]
    pub button_type: ButtonType,
    #[props(default)]
    pub primary: bool,
    #[props(default)]
    pub strong: bool,
    #[props(into)]
    pub class: Option<String>,
    pub on_click: Option<EventHandler<MouseEvent>>,
}

/// Button; with no `on_click` the click falls through to native behavior
/// (for `Submit`, the enclosing form's submit event).
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let classes = class_names(
        roots::BUTTON,
        [
            (modifier(roots::BUTTON, "primary"), props.primary),
            (modifier(roots::BUTTON, "strong"), props.strong),
            (props.class.clone().unwrap_or_default(), true),
        ],
    );
    let on_click = props.on_click;

    rsx! {
        button {
            class: "{classes}",
            r#type: props.button_type.as_str(),
            onclick: move |event| {
                if let Some(handler) = on_click {
                    handler.call(event);
                }
            },
            {props.label}
        }
    }
}
