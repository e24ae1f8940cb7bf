use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::{Registration, SessionUser};
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::services::AuthService;
use crate::domain::session::use_cases::register::{RegisterParams, RegisterUseCase};

pub struct RegisterUseCaseImpl {
    pub auth: Arc<dyn AuthService>,
    pub sessions: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<SessionUser, SessionError> {
        let registration = Registration::new(&params.name, &params.email, &params.password)?;
        self.logger
            .info(&format!("Registering account {}", registration.email));

        let session = self.auth.register(&registration).await.map_err(|e| {
            self.logger.warn(&format!(
                "Registration failed: {} {}",
                e,
                e.server_message().unwrap_or_default()
            ));
            SessionError::Gateway(e)
        })?;

        self.sessions
            .save_session(&session.user, &session.token)
            .await?;

        self.logger
            .info(&format!("Account registered: {}", session.user.id));
        Ok(session.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::session::model::AuthenticatedSession;
    use crate::test_support::{MockAuthApi, MockSessionRepo, mock_logger, test_token, test_user};

    fn params(name: &str) -> RegisterParams {
        RegisterParams {
            name: name.to_string(),
            email: "Jane@Example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn should_register_and_store_session() {
        let mut auth = MockAuthApi::new();
        let mut sessions = MockSessionRepo::new();

        auth.expect_register()
            .withf(|r| r.name == "Jane Doe" && r.email == "jane@example.com")
            .times(1)
            .returning(|_| {
                Ok(AuthenticatedSession {
                    user: test_user(),
                    token: test_token(),
                })
            });
        sessions
            .expect_save_session()
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = RegisterUseCaseImpl {
            auth: Arc::new(auth),
            sessions: Arc::new(sessions),
            logger: mock_logger(),
        };

        let user = use_case.execute(params(" Jane Doe ")).await.unwrap();

        assert_eq!(user.id, test_user().id);
    }

    #[tokio::test]
    async fn should_reject_blank_name_without_request() {
        let mut auth = MockAuthApi::new();
        auth.expect_register().never();

        let use_case = RegisterUseCaseImpl {
            auth: Arc::new(auth),
            sessions: Arc::new(MockSessionRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("  ")).await;

        assert!(matches!(result.unwrap_err(), SessionError::NameMissing));
    }

    #[tokio::test]
    async fn should_keep_server_message_for_existing_account() {
        let mut auth = MockAuthApi::new();
        auth.expect_register().returning(|_| {
            Err(GatewayError::rejected(
                400,
                Some("User already exists".to_string()),
            ))
        });

        let use_case = RegisterUseCaseImpl {
            auth: Arc::new(auth),
            sessions: Arc::new(MockSessionRepo::new()),
            logger: mock_logger(),
        };

        let err = use_case.execute(params("Jane")).await.unwrap_err();

        match err {
            SessionError::Gateway(gateway) => {
                assert_eq!(gateway.server_message(), Some("User already exists"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
