use crate::features::login::types::*;

/// Hand the trimmed credentials to `on_submit`, if one is configured.
///
/// Returns whether a callback ran. A missing callback is a silent no-op:
/// the form does not treat it as a configuration error.
pub fn submit_credentials<F>(state: &LoginFormState, on_submit: Option<F>) -> bool
where
    F: FnOnce(LoginCredentials),
{
    match on_submit {
        Some(callback) => {
            callback(state.credentials());
            true
        }
        None => false,
    }
}

/// Error keys that produce a rendered line, paired with their position in
/// the original list. Empty entries are skipped; order is preserved.
pub fn visible_errors(errors: &[String]) -> impl Iterator<Item = (usize, &str)> {
    errors
        .iter()
        .enumerate()
        .filter(|(_, error)| !error.is_empty())
        .map(|(index, error)| (index, error.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn filled_state() -> LoginFormState {
        LoginFormState::new(&DefaultValues::new("", true))
            .reduce(LoginFormAction::SetUsername(" bob ".to_string()))
            .reduce(LoginFormAction::SetPassword(" pw ".to_string()))
    }

    #[test]
    fn test_submit_calls_callback_once_with_trimmed_values() {
        let received = RefCell::new(Vec::new());

        let called = submit_credentials(
            &filled_state(),
            Some(|credentials: LoginCredentials| received.borrow_mut().push(credentials)),
        );

        assert!(called);
        let received = received.into_inner();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0],
            LoginCredentials {
                username: "bob".to_string(),
                password: "pw".to_string(),
                remember_me: true,
            }
        );
    }

    #[test]
    fn test_submit_without_callback_is_noop() {
        let called = submit_credentials::<fn(LoginCredentials)>(&filled_state(), None);
        assert!(!called);
    }

    #[test]
    fn test_submit_does_not_validate() {
        let received = RefCell::new(None);

        submit_credentials(
            &LoginFormState::default(),
            Some(|credentials: LoginCredentials| *received.borrow_mut() = Some(credentials)),
        );

        let credentials = received.into_inner().expect("callback should run");
        assert_eq!(credentials.username, "");
        assert_eq!(credentials.password, "");
    }

    #[test]
    fn test_visible_errors_skip_empty_entries() {
        let errors = vec![
            "Bad username".to_string(),
            String::new(),
            "Bad password".to_string(),
        ];

        let visible: Vec<_> = visible_errors(&errors).collect();
        assert_eq!(visible, vec![(0, "Bad username"), (2, "Bad password")]);
    }

    #[test]
    fn test_visible_errors_empty_list() {
        assert_eq!(visible_errors(&[]).count(), 0);
    }
}
