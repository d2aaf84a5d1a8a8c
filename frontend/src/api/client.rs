use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::error::{ErrorBody, RequestError},
    config,
};

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    /// Sends the request, labelling any transport failure with the URL that
    /// was attempted (query string included).
    pub(crate) async fn send(
        &self,
        builder: RequestBuilder,
        url: &str,
    ) -> Result<Response, RequestError> {
        let request = builder
            .build()
            .map_err(|e| RequestError::transport(url, e))?;
        let attempted = request.url().to_string();
        log::debug!("{} {}", request.method(), attempted);

        if let Some(intercepted) = intercept(&request, &attempted) {
            return intercepted;
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| RequestError::transport(attempted, e))
    }

    pub(crate) async fn read_json<T: DeserializeOwned>(
        response: Response,
        url: &str,
        fallback: &str,
    ) -> Result<T, RequestError> {
        let response = Self::ensure_success(response, url, fallback).await?;
        let raw = response
            .text()
            .await
            .map_err(|e| RequestError::decode(url, e))?;
        serde_json::from_str(&raw).map_err(|e| RequestError::decode(url, e))
    }

    pub(crate) async fn ensure_success(
        response: Response,
        url: &str,
        fallback: &str,
    ) -> Result<Response, RequestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let raw = response.text().await.unwrap_or_default();
        Err(Self::status_error(status, &raw, url, fallback))
    }

    fn status_error(status: StatusCode, raw: &str, url: &str, fallback: &str) -> RequestError {
        RequestError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body: ErrorBody::decode(raw),
            fallback: fallback.to_string(),
        }
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn intercept(_request: &reqwest::Request, _url: &str) -> Option<Result<Response, RequestError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn intercept(request: &reqwest::Request, url: &str) -> Option<Result<Response, RequestError>> {
    mock_hook::mock_for(request.url().as_str())
        .map(|responder| responder.respond(request).into_response(url))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_hook::*;
