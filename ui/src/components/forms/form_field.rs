use crate::utils::class_names::{element, roots};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FormFieldProps {
    /// Id of the input this field labels
    #[props(into)]
    pub html_for: String,
    pub label: Element,
    pub children: Element,
}

#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    rsx! {
        div {
            class: roots::FORM_FIELD,
            label {
                class: element(roots::FORM_FIELD, "label"),
                r#for: "{props.html_for}",
                {props.label}
            }
            span {
                class: element(roots::FORM_FIELD, "contents"),
                {props.children}
            }
        }
    }
}
