use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::SessionUser;

pub struct LoginParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, params: LoginParams) -> Result<SessionUser, SessionError>;
}
