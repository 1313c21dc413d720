use ui::components::inputs::InputType;
use ui::features::login::LoginCredentials;

/// Caller-side checks for submitted credentials.
///
/// Returns message keys in display order; an empty list means the
/// credentials can be accepted.
pub fn validate_credentials(credentials: &LoginCredentials, username_type: InputType) -> Vec<String> {
    let mut errors = Vec::new();

    if credentials.username.is_empty() {
        errors.push("Username is required".to_string());
    } else if username_type == InputType::Email && !looks_like_email(&credentials.username) {
        errors.push("Enter a valid email address".to_string());
    }

    if credentials.password.is_empty() {
        errors.push("Password is required".to_string());
    }

    errors
}

/// `local@host.tld` shape only; deliverability is the server's concern.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, host)) => {
            !local.is_empty()
                && !host.contains('@')
                && host.split('.').count() >= 2
                && host.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}
