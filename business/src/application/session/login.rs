use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::{LoginCredentials, SessionUser};
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::services::AuthService;
use crate::domain::session::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub auth: Arc<dyn AuthService>,
    pub sessions: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<SessionUser, SessionError> {
        let credentials = LoginCredentials::new(&params.email, &params.password)?;
        self.logger
            .info(&format!("Signing in as {}", credentials.email));

        let session = self
            .auth
            .login(&credentials)
            .await
            .map_err(|e| match e {
                GatewayError::Unauthorized | GatewayError::Rejected { status: 400, .. } => {
                    self.logger.warn(&format!(
                        "Sign in rejected for {}: {}",
                        credentials.email,
                        e.server_message().unwrap_or("invalid credentials")
                    ));
                    SessionError::InvalidCredentials
                }
                other => {
                    self.logger.error(&format!("Sign in failed: {}", other));
                    SessionError::Gateway(other)
                }
            })?;

        self.sessions
            .save_session(&session.user, &session.token)
            .await?;

        self.logger.info(&format!("Signed in: {}", session.user.id));
        Ok(session.user)
    }
}
