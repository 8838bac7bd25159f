use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::api::error::ApiError;
use crate::config::AppConfig;
use crate::repository::CredentialSource;

/// Canonical success envelope. The backend has been seen wrapping payloads
/// three different ways; only `{"data": …}` is accepted here so a contract
/// drift fails loudly instead of being unwrapped on a guess.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// The one configured request issuer: fixed base URL, fixed timeout, and a
/// bearer credential read from persistent storage on every request.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Arc<dyn CredentialSource>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, credentials: Arc<dyn CredentialSource>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builds a request with `Authorization: Bearer …` attached when a
    /// credential is present in storage. A missing credential is not an
    /// error here; unauthenticated calls are the backend's to reject.
    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        debug!(%method, path, "issuing request");
        let mut builder = self.http.request(method, self.url(path));
        match self.credentials.access_token().await {
            Ok(Some(token)) => builder = builder.bearer_auth(token),
            Ok(None) => {}
            Err(err) => return Err(ApiError::Storage(err.to_string())),
        }
        Ok(builder)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).await?.send().await?;
        Self::unwrap_envelope(response).await
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::POST, path).await?.json(body).send().await?;
        Self::unwrap_envelope(response).await
    }

    /// POST whose response payload the caller does not consume; only the
    /// status is checked.
    pub(crate) async fn post_json_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::POST, path).await?.json(body).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Bodyless POST carrying its arguments in the query string.
    pub(crate) async fn post_query_unit(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, path)
            .await?
            .query(query)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::POST, path)
            .await?
            .multipart(form)
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let bytes = response.bytes().await.unwrap_or_default();
        let message = error_message(status, &bytes);
        warn!(%status, %message, "server rejected request");
        Err(ApiError::Server { status, message })
    }

    async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        decode_envelope(&bytes)
    }
}

fn decode_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let envelope: Envelope<T> =
        serde_json::from_slice(bytes).map_err(|err| ApiError::InvalidResponse(err.to_string()))?;
    Ok(envelope.data)
}

fn error_message(status: StatusCode, bytes: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(bytes)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("request failed with status {status}"))
}
