pub mod form_field;
pub mod login_form;

pub use form_field::FormField;
pub use login_form::*;
