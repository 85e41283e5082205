use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};

use crate::api::error::ApiError;
use crate::api::types::{LoginRequest, LoginResponse, ServerMessage};
use crate::config;
use crate::session::Session;

/// Thin transport over the portal API. One instance is provided via context
/// at the application root; every view reaches the server through it.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    session: Session,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            http: Client::new(),
            session,
            base_url: None,
        }
    }

    /// Client pinned to a fixed base URL, bypassing runtime config. Tests
    /// point this at a mock server.
    pub fn new_with_base_url(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            http: Client::new(),
            session,
            base_url: Some(base_url.into()),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Bearer credential from the session. Calls made without a stored token
    /// are rejected locally; the server never sees them.
    pub(crate) fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = self
            .session
            .token()
            .ok_or_else(|| ApiError::Rejected(Some("Not logged in".into())))?;

        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::Rejected(Some("Invalid token format".into())))?;
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Error-path decoding for a non-success response. A message in the body
    /// is carried verbatim; anything else becomes a message-less rejection.
    pub(crate) async fn rejection(response: Response) -> ApiError {
        match response.json::<ServerMessage>().await {
            Ok(body) => ApiError::Rejected(body.message),
            Err(_) => ApiError::Rejected(None),
        }
    }

    /// `POST /auth/login`. On success with a token the session persists it;
    /// a success body without one is reported as malformed and nothing is
    /// stored.
    pub async fn login(&self, request: LoginRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http
            .post(format!("{}/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        if response.status().is_success() {
            let body: LoginResponse = response.json().await.map_err(ApiError::from_transport)?;
            match body.token {
                Some(token) => {
                    self.session.store(&token);
                    Ok(())
                }
                None => Err(ApiError::Malformed),
            }
        } else {
            Err(Self::rejection(response).await)
        }
    }
}
