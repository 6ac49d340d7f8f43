use gyan_schema::{LoginCredentials, LoginSession, QuizRequest};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};
use url::Url;

use crate::api::{
    ApiEndpoints, AuthToken, QuizEndpoint, QuizPayload, classify_error_response,
    unwrap_login_session, unwrap_quiz_payload,
};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::utils::logging::with_pretty_json_debug;

/// Typed client for the quiz backend.
///
/// Stateless apart from the pooled `reqwest::Client`; cloning is cheap.
#[derive(Debug, Clone)]
pub struct QuizApiClient {
    client: reqwest::Client,
    endpoints: ApiEndpoints,
}

impl QuizApiClient {
    pub fn new(cfg: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = cfg.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_client(client, &cfg.base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &Url) -> Self {
        Self {
            client,
            endpoints: ApiEndpoints::new(base_url),
        }
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    /// Logs in and returns the bearer token for later quiz requests.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthToken, ApiError> {
        let session = self.login_session(credentials).await?;
        Ok(AuthToken::from(session.access_token))
    }

    /// Logs in and returns everything the backend reports about the session.
    pub async fn login_session(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<LoginSession, ApiError> {
        let start = Instant::now();
        let url = self.endpoints.login();
        info!(
            identifier = %credentials.identifier,
            "[Login] Post -> {}", url
        );

        let resp = self.post_json(url, None, credentials).await?;
        let body = resp.bytes().await?;
        let session = unwrap_login_session(&body)?;

        if session.needs_verification() {
            warn!(
                username = session.username.as_deref().unwrap_or("<unknown>"),
                "[Login] Account is not verified yet"
            );
        }
        info!(
            username = session.username.as_deref().unwrap_or("<unknown>"),
            took_ms = start.elapsed().as_millis() as u64,
            "[Login] Logged in"
        );
        Ok(session)
    }

    /// `POST /api/quiz/generate`.
    pub async fn generate_quiz(
        &self,
        token: Option<&AuthToken>,
        request: &QuizRequest,
    ) -> Result<QuizPayload, ApiError> {
        self.request_quiz(QuizEndpoint::Generate, token, request)
            .await
    }

    /// `POST /api/quiz/new`.
    pub async fn new_quiz(
        &self,
        token: Option<&AuthToken>,
        request: &QuizRequest,
    ) -> Result<QuizPayload, ApiError> {
        self.request_quiz(QuizEndpoint::New, token, request).await
    }

    /// Sends `request` to a quiz endpoint and unwraps the double-encoded payload.
    pub async fn request_quiz(
        &self,
        endpoint: QuizEndpoint,
        token: Option<&AuthToken>,
        request: &QuizRequest,
    ) -> Result<QuizPayload, ApiError> {
        let start = Instant::now();
        let url = self.endpoints.quiz(endpoint);
        info!(
            req.topic = %request.topic,
            req.num_questions = request.num_questions.get(),
            req.difficulty = %request.difficulty,
            authenticated = token.is_some(),
            "[Quiz] Post -> {}", url
        );

        let resp = self.post_json(url, token, request).await?;
        let body = resp.bytes().await?;
        let payload = unwrap_quiz_payload(&body)?;

        with_pretty_json_debug(payload.as_value(), |pretty| {
            debug!(payload = %pretty, "[Quiz] Decoded payload");
        });
        info!(
            took_ms = start.elapsed().as_millis() as u64,
            "[Quiz] Payload decoded"
        );
        Ok(payload)
    }

    /// Single request path for every endpoint: JSON body, optional bearer token.
    ///
    /// Returns the response only when its status is 2xx; anything else is classified
    /// into `ApiError::Http`.
    pub async fn post_json<T>(
        &self,
        url: &Url,
        token: Option<&AuthToken>,
        body: &T,
    ) -> Result<reqwest::Response, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let mut request = self.client.post(url.clone()).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token.as_str());
        }

        let resp = request.send().await.inspect_err(|error| {
            warn!(url = %url, %error, "Backend request failed");
        })?;

        if !resp.status().is_success() {
            let error = classify_error_response(resp).await;
            warn!(
                url = %url,
                status = ?error.status(),
                error = %error,
                "Backend returned error"
            );
            return Err(error);
        }

        Ok(resp)
    }
}
