//! Layout and typography primitives shared by the forms and displays.

pub mod types;

pub use types::*;

use crate::utils::class_names::{class_names, modifier, roots};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LayoutBoxProps {
    #[props(default)]
    pub layout: BoxLayout,
    #[props(into)]
    pub class: Option<String>,
    pub children: Element,
}

/// Generic spacing/alignment container.
#[component]
pub fn LayoutBox(props: LayoutBoxProps) -> Element {
    let classes = class_names(
        &props.layout.class_names(roots::BOX),
        [(props.class.clone().unwrap_or_default(), true)],
    );

    rsx! {
        div {
            class: "{classes}",
            role: props.layout.role.clone(),
            aria_label: props.layout.a11y_title.clone(),
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FooterProps {
    #[props(default)]
    pub layout: BoxLayout,
    #[props(into)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let classes = class_names(
        roots::FOOTER,
        [
            (props.layout.class_names(roots::BOX), true),
            (props.class.clone().unwrap_or_default(), true),
        ],
    );

    rsx! {
        footer {
            class: "{classes}",
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct HeadingProps {
    #[props(default)]
    pub strong: bool,
    #[props(into)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Heading(props: HeadingProps) -> Element {
    let classes = class_names(
        roots::HEADING,
        [
            (modifier(roots::HEADING, "strong"), props.strong),
            (props.class.clone().unwrap_or_default(), true),
        ],
    );

    rsx! {
        h1 {
            class: "{classes}",
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ParagraphProps {
    #[props(into)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Paragraph(props: ParagraphProps) -> Element {
    let classes = class_names(
        roots::PARAGRAPH,
        [(props.class.clone().unwrap_or_default(), true)],
    );

    rsx! {
        p {
            class: "{classes}",
            {props.children}
        }
    }
}
