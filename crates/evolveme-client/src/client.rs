//! HTTP client for the EvolveMe REST API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use evolveme_core::{
    ChatMessage, ConversationsResponse, CoreError, Credentials, LoginResponse,
    PostMessageRequest, RegisterResponse,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ErrorBody};
use crate::token::TokenStore;

/// Health check response.
#[derive(Debug, Clone, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Client for the auth and conversation endpoints.
///
/// Every request goes through [`ApiClient::request`], which attaches
/// `Authorization: Bearer <token>` whenever the store holds a token.
pub struct ApiClient<S> {
    inner: reqwest::Client,
    base_url: String,
    store: S,
}

impl<S: TokenStore> ApiClient<S> {
    /// Create a new client.
    pub fn new(config: &ClientConfig, store: S) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let builder = reqwest::Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));

        Ok(Self {
            inner: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    /// Whether a token is stored.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.store.get(), Ok(Some(_)))
    }

    /// Register a new account.
    pub async fn register(&self, credentials: &Credentials) -> Result<RegisterResponse, ClientError> {
        credentials.validate()?;
        let response = self
            .execute(self.request(Method::POST, "/auth/register")?.json(credentials))
            .await?;
        info!(email = %credentials.email, "Registered");
        Ok(response)
    }

    /// Log in and store the returned token.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        credentials.validate()?;
        let response: LoginResponse = self
            .execute(self.request(Method::POST, "/auth/login")?.json(credentials))
            .await?;
        self.store.set(&response.access_token)?;
        info!(email = %credentials.email, "Logged in");
        Ok(response)
    }

    /// Forget the stored token.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.store.clear()?;
        info!("Logged out");
        Ok(())
    }

    /// Fetch the conversation history, oldest first.
    pub async fn conversations(&self) -> Result<Vec<ChatMessage>, ClientError> {
        let response: ConversationsResponse = self
            .execute(self.request(Method::GET, "/conversations")?)
            .await?;
        Ok(response.conversations)
    }

    /// Send a message and return the AI reply.
    pub async fn post_message(&self, content: &str) -> Result<ChatMessage, ClientError> {
        if content.trim().is_empty() {
            return Err(CoreError::EmptyMessage.into());
        }
        let body = PostMessageRequest {
            content: content.to_string(),
        };
        self.execute(self.request(Method::POST, "/conversations")?.json(&body))
            .await
    }

    /// Check if the backend is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let response: HealthResponse = self.execute(self.request(Method::GET, "/health")?).await?;
        Ok(response.status == "ok")
    }

    /// Build a request with the bearer token attached when one is stored.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let token = self.store.get()?;
        debug!(method = %method, url = %url, authorized = token.is_some(), "API request");

        let builder = self.inner.request(method, &url);
        Ok(match token {
            Some(token) => builder.header(AUTHORIZATION, token.bearer()),
            None => builder,
        })
    }

    /// Send a request and decode a 2xx JSON body.
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            warn!(status = status.as_u16(), error = ?message, "API request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Serialization(e.to_string()))
    }
}
