use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::model::SessionUser;

pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, params: RegisterParams) -> Result<SessionUser, SessionError>;
}
