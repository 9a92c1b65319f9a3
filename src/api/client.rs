//! HTTP client for the platform API
//!
//! Thin wrapper around reqwest that owns the base URL, the optional
//! forwarding proxy, the fixed per-request timeout, and the bearer token
//! obtained at login. Every method checks the status the endpoint is
//! documented to answer with; field-level assertions stay with the
//! scenarios.

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::common::{Config, Credentials, Error, Result};

use super::types::{ChatMessage, CompletionClaim, Feedback, NewSession, Verification};

/// Client for the platform REST API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));

        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| Error::InvalidUrl {
                url: proxy_url.clone(),
                reason: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Bearer token retained from the last successful login, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token when one has been obtained
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        tracing::debug!(%url, "sending request");
        request
            .send()
            .await
            .map_err(|e| Error::transport(url, e))
    }

    fn expect_status(endpoint: &str, response: &Response, expected: &[StatusCode]) -> Result<()> {
        if expected.contains(&response.status()) {
            return Ok(());
        }
        let expected = expected
            .iter()
            .map(|s| s.as_u16().to_string())
            .collect::<Vec<_>>()
            .join(" or ");
        Err(Error::unexpected_status(
            endpoint,
            &expected,
            response.status(),
        ))
    }

    async fn json_body(response: Response, endpoint: &str) -> Result<Value> {
        response.json().await.map_err(|e| Error::InvalidBody {
            endpoint: endpoint.to_string(),
            source: e,
        })
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        with_auth: bool,
    ) -> Result<Response> {
        let url = self.endpoint(path);
        let mut request = self.http.post(&url).json(body);
        if with_auth {
            request = self.authorized(request);
        }
        self.send(request, &url).await
    }

    /// POST /api/auth/login: authenticate and retain the bearer token
    pub async fn login(&mut self, credentials: &Credentials) -> Result<String> {
        const ENDPOINT: &str = "POST /api/auth/login";

        let response = self
            .post_json("/api/auth/login", credentials, false)
            .await?;
        Self::expect_status(ENDPOINT, &response, &[StatusCode::OK])?;

        let body = Self::json_body(response, ENDPOINT).await?;
        let token = Self::extract_token(&body)?;
        self.token = Some(token.clone());
        Ok(token)
    }

    /// POST /api/auth/google: OAuth sign-in; the gateway accepts an
    /// empty body for the test identity and answers with a token
    pub async fn login_google(&mut self) -> Result<String> {
        const ENDPOINT: &str = "POST /api/auth/google";

        let response = self
            .post_json("/api/auth/google", &serde_json::json!({}), false)
            .await?;
        Self::expect_status(ENDPOINT, &response, &[StatusCode::OK])?;

        let body = Self::json_body(response, ENDPOINT).await?;
        let token = Self::extract_token(&body)?;
        self.token = Some(token.clone());
        Ok(token)
    }

    fn extract_token(body: &Value) -> Result<String> {
        let token = body
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MissingField("token".to_string()))?;
        if token.is_empty() {
            return Err(Error::Assertion(
                "authentication returned an empty token".to_string(),
            ));
        }
        Ok(token.to_string())
    }

    /// POST /api/sessions: create a session, returning the response body
    pub async fn create_session(&self, session: &NewSession) -> Result<Value> {
        const ENDPOINT: &str = "POST /api/sessions";

        let response = self.post_json("/api/sessions", session, true).await?;
        Self::expect_status(ENDPOINT, &response, &[StatusCode::CREATED])?;
        Self::json_body(response, ENDPOINT).await
    }

    /// GET /api/sessions: list the caller's sessions
    pub async fn list_sessions(&self) -> Result<Vec<Value>> {
        const ENDPOINT: &str = "GET /api/sessions";

        let url = self.endpoint("/api/sessions");
        let request = self.authorized(self.http.get(&url));
        let response = self.send(request, &url).await?;
        Self::expect_status(ENDPOINT, &response, &[StatusCode::OK])?;

        let body = Self::json_body(response, ENDPOINT).await?;
        match body {
            Value::Array(sessions) => Ok(sessions),
            other => Err(Error::Assertion(format!(
                "sessions response is not a JSON array, got {other}"
            ))),
        }
    }

    /// DELETE /api/sessions/{id}: returns the raw status so callers can
    /// decide which codes are acceptable (teardown tolerates more than a
    /// direct test does)
    pub async fn delete_session(&self, id: &str) -> Result<StatusCode> {
        let url = self.endpoint(&format!("/api/sessions/{id}"));
        let request = self.authorized(self.http.delete(&url));
        let response = self.send(request, &url).await?;
        Ok(response.status())
    }

    /// POST /api/chat/message: send a chat message into a session
    pub async fn send_chat_message(&self, message: &ChatMessage) -> Result<Value> {
        const ENDPOINT: &str = "POST /api/chat/message";

        let response = self.post_json("/api/chat/message", message, false).await?;
        Self::expect_status(
            ENDPOINT,
            &response,
            &[StatusCode::OK, StatusCode::CREATED],
        )?;
        Self::json_body(response, ENDPOINT).await
    }

    /// POST /api/feedback: submit feedback for a session
    pub async fn submit_feedback(&self, feedback: &Feedback) -> Result<Value> {
        const ENDPOINT: &str = "POST /api/feedback";

        let response = self.post_json("/api/feedback", feedback, true).await?;
        Self::expect_status(
            ENDPOINT,
            &response,
            &[StatusCode::OK, StatusCode::CREATED],
        )?;
        Self::json_body(response, ENDPOINT).await
    }

    /// POST /api/blockchain/verify: verify a skill completion on chain
    pub async fn verify_completion(&self, claim: &CompletionClaim) -> Result<Verification> {
        const ENDPOINT: &str = "POST /api/blockchain/verify";

        let response = self
            .post_json("/api/blockchain/verify", claim, false)
            .await?;
        Self::expect_status(ENDPOINT, &response, &[StatusCode::OK])?;

        let body = Self::json_body(response, ENDPOINT).await?;
        serde_json::from_value(body).map_err(Error::Json)
    }

    /// GET /api/health: connectivity probe
    pub async fn health(&self) -> Result<()> {
        const ENDPOINT: &str = "GET /api/health";

        let url = self.endpoint("/api/health");
        let response = self.send(self.http.get(&url), &url).await?;
        Self::expect_status(ENDPOINT, &response, &[StatusCode::OK])
    }
}
