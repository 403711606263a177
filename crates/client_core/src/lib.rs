use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Method,
};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Division, RecordId},
    protocol::DivisionInput,
};
use tracing::{debug, error, info};
use url::Url;

pub mod config;
pub mod controller;
pub mod error;
pub mod view_state;

pub use controller::{
    execute, ControllerOutcome, ControllerRequest, DivisionController, SaveTarget,
};
pub use error::{ClientError, TransportErrorKind};
pub use view_state::{
    ConfirmDialog, DivisionDraft, FormDialog, LoadState, PendingOperation, SubmitError, ViewState,
};

pub const API_BASE_PATH: &str = "/api/v1/division-management";
pub const DEFAULT_API_BASE_URL: &str =
    "https://division-management-api.onrender.com/api/v1/division-management";
/// Uniform bound on every request, connect through body read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

const DIVISIONS_SEGMENT: &str = "divisions";

/// The five operations of the division collection resource.
#[async_trait]
pub trait DivisionApi: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Division>, ClientError>;
    async fn get_by_id(&self, id: &RecordId) -> Result<Division, ClientError>;
    async fn create(&self, input: &DivisionInput) -> Result<Division, ClientError>;
    async fn update(&self, id: &RecordId, input: &DivisionInput)
        -> Result<Division, ClientError>;
    async fn delete(&self, id: &RecordId) -> Result<(), ClientError>;
}

#[async_trait]
impl<T> DivisionApi for Arc<T>
where
    T: DivisionApi + ?Sized,
{
    async fn list_all(&self) -> Result<Vec<Division>, ClientError> {
        (**self).list_all().await
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<Division, ClientError> {
        (**self).get_by_id(id).await
    }

    async fn create(&self, input: &DivisionInput) -> Result<Division, ClientError> {
        (**self).create(input).await
    }

    async fn update(
        &self,
        id: &RecordId,
        input: &DivisionInput,
    ) -> Result<Division, ClientError> {
        (**self).update(id, input).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ClientError> {
        (**self).delete(id).await
    }
}

/// HTTP implementation of [`DivisionApi`].
#[derive(Debug, Clone)]
pub struct DivisionClient {
    http: Client,
    base_url: Url,
}

impl DivisionClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = parse_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(ClientError::from_reqwest)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, id: Option<&RecordId>) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push(DIVISIONS_SEGMENT);
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&DivisionInput>,
    ) -> Result<String, ClientError> {
        let path = url.path().to_string();
        info!(method = %method, path = %path, "division api: sending request");

        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                let err = ClientError::from_reqwest(err);
                error!(
                    method = %method,
                    path = %path,
                    message = %err,
                    "division api: request failed"
                );
                return Err(err);
            }
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                let err = ClientError::from_reqwest(err);
                error!(
                    method = %method,
                    path = %path,
                    status = status.as_u16(),
                    message = %err,
                    "division api: failed reading response body"
                );
                return Err(err);
            }
        };

        if !status.is_success() {
            error!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                body = %text,
                "division api: service error"
            );
            return Err(ClientError::Service {
                status: status.as_u16(),
                body: text,
            });
        }

        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "division api: response received"
        );
        debug!(body = %text, "division api: response payload");
        Ok(text)
    }
}

#[async_trait]
impl DivisionApi for DivisionClient {
    async fn list_all(&self) -> Result<Vec<Division>, ClientError> {
        let url = self.endpoint(None)?;
        let body = self.send(Method::GET, url, None).await?;
        decode(&body)
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<Division, ClientError> {
        let url = self.endpoint(Some(id))?;
        let body = self.send(Method::GET, url, None).await?;
        decode(&body)
    }

    async fn create(&self, input: &DivisionInput) -> Result<Division, ClientError> {
        let url = self.endpoint(None)?;
        let body = self.send(Method::POST, url, Some(input)).await?;
        decode(&body)
    }

    async fn update(
        &self,
        id: &RecordId,
        input: &DivisionInput,
    ) -> Result<Division, ClientError> {
        let url = self.endpoint(Some(id))?;
        let body = self.send(Method::PUT, url, Some(input)).await?;
        decode(&body)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ClientError> {
        let url = self.endpoint(Some(id))?;
        // 200 with any payload and 204 with none are both success.
        self.send(Method::DELETE, url, None).await.map(|_| ())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let url =
        Url::parse(raw.trim()).map_err(|err| ClientError::InvalidBaseUrl(format!("{raw}: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl(format!(
            "{raw}: scheme must be http or https"
        )));
    }
    Ok(url)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|err| {
        let err = ClientError::Decode(err.to_string());
        error!(message = %err, "division api: undecodable response");
        err
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
