//! Localization
//!
//! - **catalog**: JSON message catalogs and lookup with fallbacks
//! - [`I18nProvider`]: puts a catalog into Dioxus context
//! - [`FormattedMessage`]: renders a message key through the nearest catalog
//!
//! Components work without a provider; every key then renders as its default.

pub mod catalog;

pub use catalog::*;

use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct I18nProviderProps {
    pub catalog: MessageCatalog,
    pub children: Element,
}

#[component]
pub fn I18nProvider(props: I18nProviderProps) -> Element {
    let mut catalog = use_context_provider(|| Signal::new(props.catalog.clone()));

    // Keep context in sync when the parent swaps catalogs (e.g. locale switch)
    use_effect(use_reactive((&props.catalog,), move |(next,)| {
        if *catalog.peek() != next {
            catalog.set(next);
        }
    }));

    rsx! { {props.children} }
}

/// Localized text for `id` from the catalog in context.
pub fn use_message(id: &str, default_message: Option<&str>) -> String {
    match try_use_context::<Signal<MessageCatalog>>() {
        Some(catalog) => catalog.read().format(id, default_message).to_string(),
        None => default_message.unwrap_or(id).to_string(),
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FormattedMessageProps {
    #[props(into)]
    pub id: String,
    #[props(into)]
    pub default_message: Option<String>,
}

#[component]
pub fn FormattedMessage(props: FormattedMessageProps) -> Element {
    let text = use_message(&props.id, props.default_message.as_deref());

    rsx! { "{text}" }
}
