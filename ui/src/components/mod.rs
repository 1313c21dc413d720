//! User Interface Components
//!
//! Reusable Dioxus components:
//!
//! - **forms**: the login form and its form fields
//! - **display**: block quotes and other read-only content
//! - **inputs**: controlled inputs, check boxes and buttons
//! - **layout**: the layout container, footer and typography primitives
//!
//! Components are pure functions of their props plus, for forms, their own
//! local signal state.

pub mod display;
pub mod forms;
pub mod inputs;
pub mod layout;

pub use display::Quote;
pub use forms::LoginForm;
