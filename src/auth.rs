//! Credential gate backed by a secret-held allow-list. Entries come from the
//! environment (`LOGIN_EMAIL_n` / `LOGIN_PASSWORD_n`); nothing is compiled
//! into the client. No session tokens, no expiry.

use thiserror::Error;

const MAX_ENV_ENTRIES: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingFields,
    #[error("Invalid email or password")]
    InvalidCredentials,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default)]
pub struct AllowList {
    entries: Vec<Credential>,
}

impl AllowList {
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    /// Reads `LOGIN_EMAIL_1..=3` / `LOGIN_PASSWORD_1..=3`; incomplete pairs
    /// are skipped. An empty allow-list rejects every login.
    pub fn from_env() -> Self {
        let entries = (1..=MAX_ENV_ENTRIES)
            .filter_map(|n| {
                let email = std::env::var(format!("LOGIN_EMAIL_{n}")).ok()?;
                let password = std::env::var(format!("LOGIN_PASSWORD_{n}")).ok()?;
                if email.is_empty() || password.is_empty() {
                    return None;
                }
                Some(Credential { email, password })
            })
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn verify(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        let valid = self
            .entries
            .iter()
            .any(|c| c.email == email && c.password == password);
        if valid {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow_list() -> AllowList {
        AllowList::new(vec![Credential {
            email: "teacher@example.com".into(),
            password: "sekrit".into(),
        }])
    }

    #[test]
    fn accepts_listed_credentials() {
        assert_eq!(allow_list().verify("teacher@example.com", "sekrit"), Ok(()));
    }

    #[test]
    fn rejects_unknown_credentials() {
        assert_eq!(
            allow_list().verify("teacher@example.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            allow_list().verify("stranger@example.com", "sekrit"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            allow_list().verify("", "sekrit"),
            Err(AuthError::MissingFields)
        );
        assert_eq!(
            allow_list().verify("teacher@example.com", ""),
            Err(AuthError::MissingFields)
        );
    }

    #[test]
    fn empty_allow_list_rejects_everyone() {
        assert_eq!(
            AllowList::default().verify("a@b.c", "pw"),
            Err(AuthError::InvalidCredentials)
        );
    }
}
