//! HTTP client for the review-analysis backend.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    errors::{DEFAULT_DOWNLOAD_ERROR_MESSAGE, DEFAULT_ERROR_MESSAGE},
    query::Query,
    types::{ApiResponse, ErrorBody},
    ApiError,
};

/// Per-request transport overrides.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header. Later values replace earlier ones with the same name,
    /// including the default `content-type`.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Overrides the client timeout for this request only.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP client for the review-analysis backend.
///
/// Every JSON operation returns the decoded [`ApiResponse`] envelope or an
/// [`ApiError`]; transport failures and envelopes with `success == false`
/// both come back as `ApiError`, so callers only ever match one error type.
/// Nothing is retried.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL every endpoint is joined onto, without a trailing slash.
    base_api_url: String,
}

impl Client {
    /// Creates a client for `base_url` with the transport's default timeout.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            ApiError::transport(format!("Failed to build HTTP client: {}", e), 0)
        })?;
        Ok(Self::with_http_client(base_url, http))
    }

    /// Creates a client whose requests time out after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                ApiError::transport(format!("Failed to build HTTP client: {}", e), 0)
            })?;
        Ok(Self::with_http_client(base_url, http))
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_api_url, endpoint.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed from {}: {}", raw, e);
            ApiError::transport(format!("Invalid request URL: {}", e), 0)
        })
    }

    async fn send<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!("{} {}", method, url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut builder = self.http.request(method, url);

        if let Some(options) = options {
            for (name, value) in &options.headers {
                let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    ApiError::transport(format!("Invalid header name {}: {}", name, e), 0)
                })?;
                let value = HeaderValue::from_str(value).map_err(|e| {
                    ApiError::transport(format!("Invalid header value: {}", e), 0)
                })?;
                headers.insert(name, value);
            }
            if let Some(timeout) = options.timeout {
                builder = builder.timeout(timeout);
            }
        }
        builder = builder.headers(headers);

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(|e| {
                tracing::error!("Failed to serialize request body: {}", e);
                ApiError::transport(format!("Failed to serialize request body: {}", e), 0)
            })?;
            builder = builder.body(payload);
        }

        builder.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            ApiError::transport(
                format!("Network request failed: {}", e),
                e.status().map(|s| s.as_u16()).unwrap_or(0),
            )
        })
    }

    async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        url: Url,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let resp = self.send(method.clone(), url, body, options).await?;
        let status = resp.status().as_u16();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            ApiError::transport(format!("Failed to read response body: {}", e), status)
        })?;

        process_response(status, &text).inspect_err(|err| {
            tracing::error!(
                "{} {} failed with status {} [{}] trace_id={}: {}",
                method,
                endpoint,
                err.status_code,
                err.code,
                err.trace_id.as_deref().unwrap_or("-"),
                err.message
            );
        })
    }

    /// GET `endpoint`.
    pub async fn get<T>(
        &self,
        endpoint: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(endpoint)?;
        self.request::<T, ()>(Method::GET, endpoint, url, None, options)
            .await
    }

    /// GET `endpoint` with the query's parameters appended.
    pub async fn get_with_query<T, Q>(
        &self,
        endpoint: &str,
        query: &Q,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = query.add_to_url(&self.get_url(endpoint)?);
        self.request::<T, ()>(Method::GET, endpoint, url, None, options)
            .await
    }

    /// POST `body` as JSON to `endpoint`.
    pub async fn post<T, B>(
        &self,
        endpoint: &str,
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(endpoint)?;
        self.request(Method::POST, endpoint, url, Some(body), options)
            .await
    }

    /// PUT `body` as JSON to `endpoint`.
    pub async fn put<T, B>(
        &self,
        endpoint: &str,
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(endpoint)?;
        self.request(Method::PUT, endpoint, url, Some(body), options)
            .await
    }

    /// PATCH `body` as JSON to `endpoint`.
    pub async fn patch<T, B>(
        &self,
        endpoint: &str,
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(endpoint)?;
        self.request(Method::PATCH, endpoint, url, Some(body), options)
            .await
    }

    /// DELETE `endpoint`.
    pub async fn delete<T>(
        &self,
        endpoint: &str,
        options: Option<&RequestOptions>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(endpoint)?;
        self.request::<T, ()>(Method::DELETE, endpoint, url, None, options)
            .await
    }

    /// GET a file. The raw response is returned untouched on a 2xx status;
    /// anything else is decoded as an error body and raised as [`ApiError`].
    pub async fn download_file(
        &self,
        endpoint: &str,
        options: Option<&RequestOptions>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.get_url(endpoint)?;
        let resp = self
            .send::<()>(Method::GET, url, None, options)
            .await?;
        check_download(resp).await
    }

    /// POST `body` and download the resulting file. Same error handling as
    /// [`Client::download_file`].
    pub async fn post_download_file<B>(
        &self,
        endpoint: &str,
        body: &B,
        options: Option<&RequestOptions>,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.get_url(endpoint)?;
        let resp = self.send(Method::POST, url, Some(body), options).await?;
        check_download(resp).await
    }
}

/// Decodes a JSON body into the envelope and enforces its `success` flag.
///
/// A successful envelope is returned unchanged. A failed one becomes an
/// [`ApiError`] carrying the envelope's `error` (or a default message), its
/// `code` (or `INTERNAL_ERROR`) and the transport `status`. A body that is
/// not an envelope at all is reported as `INTERNAL_ERROR`.
pub fn process_response<T>(status: u16, body: &str) -> Result<ApiResponse<T>, ApiError>
where
    T: DeserializeOwned,
{
    let result = serde_json::from_str::<ApiResponse<T>>(body).map_err(|e| {
        tracing::error!(
            "Failed to parse response envelope: {} | body: {}",
            e,
            truncate_body(body)
        );
        ApiError::transport(format!("Failed to parse response: {}", e), status)
    })?;

    if !result.success {
        return Err(ApiError::from_parts(
            result.error,
            result.code.as_deref(),
            status,
            DEFAULT_ERROR_MESSAGE,
        )
        .with_trace_id(result.trace_id));
    }

    Ok(result)
}

async fn check_download(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let parsed = serde_json::from_str::<ErrorBody>(&body).unwrap_or_default();
    let err = ApiError::from_parts(
        parsed.error,
        parsed.code.as_deref(),
        status.as_u16(),
        DEFAULT_DOWNLOAD_ERROR_MESSAGE,
    )
    .with_trace_id(parsed.trace_id.unwrap_or_default());
    tracing::error!(
        "Download failed with status {} [{}]: {}",
        status,
        err.code,
        err.message
    );
    Err(err)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
