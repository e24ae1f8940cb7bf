use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use business::domain::errors::GatewayError;
use business::domain::session::model::AuthToken;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Shared HTTP client for the storefront API.
#[derive(Clone)]
pub struct ApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl ApiClient {
    /// `base_url` is the API root, e.g. `http://localhost:9000/api`.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let base_url = Url::parse(base_url).map_err(|_| GatewayError::InvalidEndpoint)?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidEndpoint);
        }

        let client = build_client(timeout)?;

        Ok(Self { client, base_url })
    }

    /// Appends path segments to the API root. Segments are percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::InvalidEndpoint)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("Content-Type", "application/json")
    }

    /// Adds the bearer header when a token is available.
    pub fn authorized(builder: RequestBuilder, token: Option<&AuthToken>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", token.bearer()),
            None => builder,
        }
    }

    /// Sends the request and decodes a JSON body, mapping HTTP failures to
    /// [`GatewayError`].
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = builder.send().await.map_err(|e| {
            tracing::debug!(error = %e, "request did not reach the API");
            GatewayError::network()
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            tracing::debug!(status = status.as_u16(), ?message, "API refused request");
            return Err(map_status(status.as_u16(), message));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::debug!(error = %e, "API response did not match the expected shape");
            GatewayError::decode()
        })
    }
}

fn build_client(timeout: Option<Duration>) -> Result<Client, GatewayError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| {
        tracing::error!(error = %e, "HTTP client could not be built");
        GatewayError::ClientSetup
    })
}

pub fn map_status(status: u16, message: Option<String>) -> GatewayError {
    match status {
        401 | 403 => GatewayError::Unauthorized,
        404 => GatewayError::NotFound,
        _ => GatewayError::rejected(status, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_segments_onto_api_root() {
        let client = ApiClient::new("http://localhost:9000/api", None).unwrap();

        let url = client.endpoint(&["cart", "merge"]).unwrap();

        assert_eq!(url.as_str(), "http://localhost:9000/api/cart/merge");
    }

    #[test]
    fn should_ignore_trailing_slash_on_root() {
        let client = ApiClient::new("http://localhost:9000/api/", None).unwrap();

        let url = client
            .endpoint(&["product-reviews", "r1", "helpful"])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:9000/api/product-reviews/r1/helpful"
        );
    }

    #[test]
    fn should_percent_encode_ids() {
        let client = ApiClient::new("http://localhost:9000/api", None).unwrap();

        let url = client.endpoint(&["product-reviews", "a/b"]).unwrap();

        assert_eq!(url.path(), "/api/product-reviews/a%2Fb");
    }

    #[test]
    fn should_reject_unusable_base_url() {
        assert!(matches!(
            ApiClient::new("not a url", None),
            Err(GatewayError::InvalidEndpoint)
        ));
        assert!(matches!(
            ApiClient::new("mailto:shop@example.com", None),
            Err(GatewayError::InvalidEndpoint)
        ));
    }

    #[test]
    fn should_build_client_with_configured_timeout() {
        let client = ApiClient::new("http://localhost:9000/api", Some(Duration::from_secs(5)));

        assert!(client.is_ok());
        assert!(build_client(Some(Duration::from_secs(5))).is_ok());
    }

    #[test]
    fn should_map_statuses_to_gateway_errors() {
        assert_eq!(map_status(401, None), GatewayError::Unauthorized);
        assert_eq!(map_status(403, None), GatewayError::Unauthorized);
        assert_eq!(map_status(404, Some("Cart not found".into())), GatewayError::NotFound);
        assert_eq!(
            map_status(400, Some("Guest cart is empty".into())),
            GatewayError::rejected(400, Some("Guest cart is empty".to_string()))
        );
    }
}
