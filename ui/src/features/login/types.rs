// Core types for the login form - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::fmt;

/// Initial values the caller seeds the form with
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct DefaultValues {
    pub username: String,
    pub remember_me: bool,
}

impl DefaultValues {
    pub fn new(username: impl Into<String>, remember_me: bool) -> Self {
        Self {
            username: username.into(),
            remember_me,
        }
    }
}

/// Values handed to the submit callback
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

// Action enum for state transitions
#[derive(Clone, Debug)]
pub enum LoginFormAction {
    SetUsername(String),
    SetPassword(String),
    SetRememberMe(bool),
}

/// Local state of a mounted login form
#[derive(Clone, PartialEq, Default)]
pub struct LoginFormState {
    pub username: String,
    pub password: String,
    pub remember_me: bool,
}

impl fmt::Debug for LoginFormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginFormState")
            .field("username", &self.username)
            .field("password_len", &self.password.len())
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

impl LoginFormState {
    /// Seed state from the caller's defaults. The password never has a default.
    pub fn new(defaults: &DefaultValues) -> Self {
        Self {
            username: defaults.username.clone(),
            password: String::new(),
            remember_me: defaults.remember_me,
        }
    }

    /// Apply one action, returning the next state.
    ///
    /// Values are stored verbatim; trimming only happens in [`Self::credentials`].
    pub fn reduce(self, action: LoginFormAction) -> Self {
        match action {
            LoginFormAction::SetUsername(username) => Self { username, ..self },
            LoginFormAction::SetPassword(password) => Self { password, ..self },
            LoginFormAction::SetRememberMe(remember_me) => Self {
                remember_me,
                ..self
            },
        }
    }

    /// Submit payload: username and password trimmed, flag passed through.
    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials {
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
            remember_me: self.remember_me,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_from_defaults() {
        let cases = [("", false), ("alice", true), ("  spaced  ", false)];

        for (username, remember_me) in cases {
            let state = LoginFormState::new(&DefaultValues::new(username, remember_me));
            assert_eq!(state.username, username);
            assert_eq!(state.password, "");
            assert_eq!(state.remember_me, remember_me);
        }
    }

    #[test]
    fn test_default_values_are_empty() {
        let state = LoginFormState::new(&DefaultValues::default());
        assert_eq!(state, LoginFormState::default());
    }

    #[test]
    fn test_username_change_only_touches_username() {
        let state = LoginFormState::new(&DefaultValues::new("alice", true))
            .reduce(LoginFormAction::SetPassword("secret".to_string()));

        let next = state
            .clone()
            .reduce(LoginFormAction::SetUsername("  bob ".to_string()));

        assert_eq!(next.username, "  bob ");
        assert_eq!(next.password, state.password);
        assert_eq!(next.remember_me, state.remember_me);
    }

    #[test]
    fn test_password_change_keeps_whitespace() {
        let state = LoginFormState::default().reduce(LoginFormAction::SetPassword(" pw \t".to_string()));
        assert_eq!(state.password, " pw \t");
        assert_eq!(state.username, "");
    }

    #[test]
    fn test_remember_me_change() {
        let state = LoginFormState::default().reduce(LoginFormAction::SetRememberMe(true));
        assert!(state.remember_me);

        let state = state.reduce(LoginFormAction::SetRememberMe(false));
        assert!(!state.remember_me);
    }

    #[test]
    fn test_credentials_are_trimmed() {
        let state = LoginFormState::default()
            .reduce(LoginFormAction::SetUsername(" bob ".to_string()))
            .reduce(LoginFormAction::SetPassword(" pw ".to_string()))
            .reduce(LoginFormAction::SetRememberMe(true));

        let credentials = state.credentials();
        assert_eq!(credentials.username, "bob");
        assert_eq!(credentials.password, "pw");
        assert!(credentials.remember_me);

        // State itself is left untouched
        assert_eq!(state.username, " bob ");
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = LoginCredentials {
            username: "bob".to_string(),
            password: "hunter2".to_string(),
            remember_me: false,
        };
        let output = format!("{:?}", credentials);
        assert!(output.contains("bob"));
        assert!(!output.contains("hunter2"));
    }
}
