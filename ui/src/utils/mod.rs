//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: logging macros (browser console on wasm, `tracing` elsewhere)
//! - **class_names**: CSS class-name composition
//! - **platform**: browser environment helpers

pub mod class_names;
pub mod console_macros;
pub mod platform;

pub use class_names::class_names;
pub use platform::*;
