//! This crate contains the shared UI components: a controlled login form,
//! a block quote, and the layout and input primitives they are built from.

pub mod components;
pub use components::{LoginForm, Quote};

pub mod features;
pub mod i18n;
pub mod utils;

#[doc(hidden)]
pub mod __private {
    pub use gloo_console;
    pub use js_sys;
    pub use tracing;
}
