//! CSS class-name composition
//!
//! Components build their `class` attribute from a fixed root class plus a
//! set of modifier classes that are only present when some prop is set.
//! [`class_names`] keeps that logic out of the `rsx!` blocks so it can be
//! tested without rendering anything.

/// Class-name roots shared by the components in this crate.
pub mod roots {
    pub const LOGIN_FORM: &str = "login-form";
    pub const QUOTE: &str = "quote";
    pub const BORDER_COLOR_INDEX: &str = "border-color-index";
    pub const BACKGROUND_COLOR_INDEX: &str = "background-color-index";
    pub const BOX: &str = "box";
    pub const FOOTER: &str = "footer";
    pub const HEADING: &str = "heading";
    pub const PARAGRAPH: &str = "paragraph";
    pub const FORM_FIELD: &str = "form-field";
    pub const CHECK_BOX: &str = "check-box";
    pub const BUTTON: &str = "button";
}

/// Join `base` with every conditional class whose flag is set.
///
/// Classes keep their input order. Empty class strings are skipped even when
/// their flag is true, so callers can pass `unwrap_or_default()` values
/// straight through.
pub fn class_names<I, S>(base: &str, conditional: I) -> String
where
    I: IntoIterator<Item = (S, bool)>,
    S: AsRef<str>,
{
    let mut classes = String::from(base.trim());

    for (class, enabled) in conditional {
        let class = class.as_ref().trim();
        if !enabled || class.is_empty() {
            continue;
        }
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(class);
    }

    classes
}

/// `"{root}--{modifier}"`, the BEM-style modifier used across the crate.
pub fn modifier(root: &str, modifier: &str) -> String {
    format!("{}--{}", root, modifier)
}

/// `"{root}__{element}"`, the BEM-style child element class.
pub fn element(root: &str, element: &str) -> String {
    format!("{}__{}", root, element)
}
