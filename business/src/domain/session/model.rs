use crate::domain::shared::value_objects::UserId;

use super::errors::SessionError;

/// Snapshot of the signed-in account as returned by the auth API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Bearer credential. The value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Returns `None` for blank input; surrounding whitespace is stripped.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

/// What the auth API hands back after login or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub user: SessionUser,
    pub token: AuthToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    /// The email is trimmed and lowercased; accounts are matched case-insensitively.
    pub fn new(email: &str, password: &str) -> Result<Self, SessionError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(SessionError::EmailMissing);
        }
        if password.is_empty() {
            return Err(SessionError::PasswordMissing);
        }

        Ok(Self {
            email,
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::NameMissing);
        }
        let credentials = LoginCredentials::new(email, password)?;

        Ok(Self {
            name: name.to_string(),
            email: credentials.email,
            password: credentials.password,
        })
    }
}

/// Where the visitor was headed when the login page was shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginContext {
    /// `?redirect=` target of the login page.
    pub redirect: Option<String>,
    /// Page that sent the visitor to the login page.
    pub from: Option<String>,
}

impl LoginContext {
    pub const CHECKOUT: &'static str = "/checkout";
    pub const HOME: &'static str = "/";

    /// Checkout wins whenever the redirect mentions it; otherwise go back to
    /// the page the visitor came from, or home.
    pub fn destination(&self) -> String {
        let is_checkout_redirect = self
            .redirect
            .as_deref()
            .is_some_and(|r| r.contains("checkout"));

        if is_checkout_redirect {
            return Self::CHECKOUT.to_string();
        }

        self.from
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(Self::HOME)
            .to_string()
    }
}
