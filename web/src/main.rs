use dioxus::prelude::*;
use ui::components::display::QuoteSize;
use ui::components::inputs::InputType;
use ui::components::layout::{Align, BoxLayout, Edges, Spacing};
use ui::features::login::{DefaultValues, LoginCredentials};
use ui::i18n::{I18nProvider, MessageCatalog};
use ui::utils::{detect_locale, language_of};
use ui::{LoginForm, Quote};

mod validation;

use validation::validate_credentials;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FR_CATALOG: &str = include_str!("../assets/locales/fr-FR.json");

fn main() {
    dioxus::launch(App);
}

/// Catalog for the browser's language; unknown languages use the built-in keys.
fn load_catalog(locale: &str) -> MessageCatalog {
    match language_of(locale) {
        "fr" => MessageCatalog::from_json(FR_CATALOG).unwrap_or_else(|e| {
            ui::console_warn!("[App] Failed to load fr-FR catalog: {}", e);
            MessageCatalog::default()
        }),
        _ => MessageCatalog::empty(locale),
    }
}

#[component]
fn App() -> Element {
    let catalog = use_hook(|| load_catalog(&detect_locale()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        I18nProvider {
            catalog: catalog,
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    let mut errors = use_signal(Vec::<String>::new);
    let mut signed_in = use_signal(|| None::<LoginCredentials>);
    let username_type = InputType::Email;

    rsx! {
        div {
            class: "gallery",

            LoginForm {
                align: Align::Center,
                title: "Sign in",
                secondary_text: "Use your work account",
                remember_me: true,
                username_type: username_type,
                default_values: DefaultValues::new("", true),
                errors: errors(),
                forgot_password: rsx! {
                    a { href: "#", class: "login-form__forgot-password", "Forgot password?" }
                },
                on_submit: move |credentials: LoginCredentials| {
                    let found = validate_credentials(&credentials, username_type);
                    if found.is_empty() {
                        ui::console_info!("[App] Signed in (remember_me: {})", credentials.remember_me);
                        signed_in.set(Some(credentials));
                    } else {
                        signed_in.set(None);
                    }
                    errors.set(found);
                }
            }

            if let Some(credentials) = signed_in() {
                Quote {
                    size: QuoteSize::Small,
                    border_color_index: "accent-2",
                    credit: "The sign-in desk",
                    p { "Welcome back, {credentials.username}." }
                }
            }

            Quote {
                border_color_index: "accent-1",
                layout: BoxLayout::default()
                    .with_margin(Edges::sides(None, Some(Spacing::Medium)))
                    .with_color_index("light-2"),
                credit: "Edsger W. Dijkstra",
                p { "Simplicity is prerequisite for reliability." }
            }
        }
    }
}
