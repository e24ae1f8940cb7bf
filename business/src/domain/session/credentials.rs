use crate::domain::errors::StorageError;

use super::model::AuthToken;
use super::repository::SessionRepository;

/// Places a bearer token can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialSource {
    /// Token held by the live session since the last login in this process.
    ActiveSession,
    /// `userToken` key written on login and registration.
    UserToken,
    /// `token` key written by older builds.
    LegacyToken,
}

impl CredentialSource {
    /// Storage key backing this source, if it is persisted at all.
    pub fn storage_key(self) -> Option<&'static str> {
        match self {
            CredentialSource::ActiveSession => None,
            CredentialSource::UserToken => Some("userToken"),
            CredentialSource::LegacyToken => Some("token"),
        }
    }
}

/// Lookup order for [`resolve_auth_token`]. First non-blank value wins.
pub const TOKEN_PRECEDENCE: [CredentialSource; 3] = [
    CredentialSource::ActiveSession,
    CredentialSource::UserToken,
    CredentialSource::LegacyToken,
];

/// Resolves the bearer token for the current session following [`TOKEN_PRECEDENCE`].
pub async fn resolve_auth_token(
    sessions: &dyn SessionRepository,
) -> Result<Option<AuthToken>, StorageError> {
    for source in TOKEN_PRECEDENCE {
        if let Some(token) = sessions
            .credential(source)
            .await?
            .as_deref()
            .and_then(AuthToken::parse)
        {
            return Ok(Some(token));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockSessionRepo;

    fn repo_with(
        active: Option<&'static str>,
        user_token: Option<&'static str>,
        legacy: Option<&'static str>,
    ) -> MockSessionRepo {
        let mut repo = MockSessionRepo::new();
        repo.expect_credential().returning(move |source| {
            let value = match source {
                CredentialSource::ActiveSession => active,
                CredentialSource::UserToken => user_token,
                CredentialSource::LegacyToken => legacy,
            };
            Ok(value.map(str::to_string))
        });
        repo
    }

    #[tokio::test]
    async fn should_prefer_active_session_token() {
        let repo = repo_with(Some("active"), Some("stored"), Some("legacy"));

        let token = resolve_auth_token(&repo).await.unwrap();

        assert_eq!(token.unwrap().as_str(), "active");
    }

    #[tokio::test]
    async fn should_fall_back_to_user_token_then_legacy_key() {
        let stored = repo_with(None, Some("stored"), Some("legacy"));
        let legacy = repo_with(None, None, Some(" legacy \n"));

        assert_eq!(
            resolve_auth_token(&stored).await.unwrap().unwrap().as_str(),
            "stored"
        );
        assert_eq!(
            resolve_auth_token(&legacy).await.unwrap().unwrap().as_str(),
            "legacy"
        );
    }

    #[tokio::test]
    async fn should_skip_blank_values() {
        let repo = repo_with(Some("   "), Some(""), Some("legacy"));

        let token = resolve_auth_token(&repo).await.unwrap();

        assert_eq!(token.unwrap().as_str(), "legacy");
    }

    #[tokio::test]
    async fn should_return_none_when_no_source_holds_a_token() {
        let repo = repo_with(None, None, None);

        assert!(resolve_auth_token(&repo).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_propagate_storage_failures() {
        let mut repo = MockSessionRepo::new();
        repo.expect_credential()
            .returning(|_| Err(StorageError::Read));

        let result = resolve_auth_token(&repo).await;

        assert!(matches!(result.unwrap_err(), StorageError::Read));
    }
}
