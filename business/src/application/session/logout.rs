use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::owner::rotate_guest_id;
use crate::domain::session::repository::SessionRepository;
use crate::domain::session::use_cases::logout::LogoutUseCase;
use crate::domain::shared::value_objects::GuestId;

pub struct LogoutUseCaseImpl {
    pub sessions: Arc<dyn SessionRepository>,
    pub carts: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self) -> Result<GuestId, SessionError> {
        self.sessions.clear_session().await?;
        let guest_id = rotate_guest_id(self.sessions.as_ref()).await?;
        self.carts.clear().await?;

        self.logger
            .info(&format!("Signed out, continuing as {}", guest_id));
        Ok(guest_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::test_support::{MockCartRepo, MockSessionRepo, mock_logger};
    use mockall::Sequence;

    #[tokio::test]
    async fn should_forget_user_rotate_guest_and_clear_cart() {
        let mut seq = Sequence::new();
        let mut sessions = MockSessionRepo::new();
        let mut carts = MockCartRepo::new();

        sessions
            .expect_clear_session()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        sessions
            .expect_save_guest_id()
            .withf(|id| id.as_str().starts_with(GuestId::PREFIX))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        carts
            .expect_clear()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let use_case = LogoutUseCaseImpl {
            sessions: Arc::new(sessions),
            carts: Arc::new(carts),
            logger: mock_logger(),
        };

        let guest_id = use_case.execute().await.unwrap();

        assert!(guest_id.as_str().starts_with("guest_"));
    }

    #[tokio::test]
    async fn should_stop_when_session_cannot_be_cleared() {
        let mut sessions = MockSessionRepo::new();
        let mut carts = MockCartRepo::new();
        sessions
            .expect_clear_session()
            .returning(|| Err(StorageError::write()));
        sessions.expect_save_guest_id().never();
        carts.expect_clear().never();

        let use_case = LogoutUseCaseImpl {
            sessions: Arc::new(sessions),
            carts: Arc::new(carts),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), SessionError::Storage(_)));
    }
}
