use async_trait::async_trait;
use reqwest::Method;

use business::domain::errors::GatewayError;
use business::domain::session::model::{AuthenticatedSession, LoginCredentials, Registration};
use business::domain::session::services::AuthService;

use crate::client::ApiClient;
use crate::dto::{AuthResponseDto, LoginRequestDto, RegisterRequestDto};

pub struct AuthServiceRest {
    client: ApiClient,
}

impl AuthServiceRest {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for AuthServiceRest {
    async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedSession, GatewayError> {
        let url = self.client.endpoint(&["users", "login"])?;
        let body = LoginRequestDto {
            email: &credentials.email,
            password: &credentials.password,
        };

        let dto: AuthResponseDto = self
            .client
            .send_json(self.client.request(Method::POST, url).json(&body))
            .await?;
        dto.into_domain()
    }

    async fn register(
        &self,
        registration: &Registration,
    ) -> Result<AuthenticatedSession, GatewayError> {
        let url = self.client.endpoint(&["users", "register"])?;
        let body = RegisterRequestDto {
            name: &registration.name,
            email: &registration.email,
            password: &registration.password,
        };

        let dto: AuthResponseDto = self
            .client
            .send_json(self.client.request(Method::POST, url).json(&body))
            .await?;
        dto.into_domain()
    }
}
