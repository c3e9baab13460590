//! ClickUp API client.
//!
//! Low-level HTTP client that handles authentication, raw requests and
//! error mapping. Resource operations live in the service traits, which are
//! implemented for this client.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{ClickUpError, Result};
use crate::query::ToQuery;

pub const DEFAULT_API_URL: &str = "https://api.clickup.com/api";
const USER_AGENT: &str = concat!("clickapi/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Low-level ClickUp API client.
///
/// Handles authentication and HTTP requests. Resource operations are
/// implemented via the service traits (`TasksService`, `ListsService`, ...)
/// and the fluent entry points such as [`ClickUpClient::tasks`].
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use clickapi::ClickUpClient;
///
/// # async fn example() -> clickapi::Result<()> {
/// // Create from environment variables
/// let client = ClickUpClient::from_env()?;
///
/// // Or configure manually
/// let client = ClickUpClient::new("pk_your_token", "https://api.clickup.com/api")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClickUpClient {
    http: Client,
    base_url: Arc<Url>,
    auth: HeaderValue,
}

impl std::fmt::Debug for ClickUpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickUpClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ClickUpClient {
    /// Create a client from environment variables.
    ///
    /// Uses `CLICKUP_API_TOKEN` for authentication and optionally
    /// `CLICKUP_API_URL` for the base URL (defaults to
    /// `https://api.clickup.com/api`).
    ///
    /// # Errors
    ///
    /// Returns an error if `CLICKUP_API_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("CLICKUP_API_TOKEN").map_err(|_| {
            ClickUpError::ConfigMissing(
                "CLICKUP_API_TOKEN environment variable not set".to_string(),
            )
        })?;

        let base_url =
            env::var("CLICKUP_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&token, &base_url)
    }

    /// Create a new client with the provided token and base URL.
    ///
    /// # Arguments
    ///
    /// * `token` - A personal token (`pk_...`) or an OAuth access token
    /// * `base_url` - Base URL without a version segment
    ///   (e.g., `https://api.clickup.com/api`)
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the base URL is invalid.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        Self::build(token, base_url, DEFAULT_TIMEOUT)
    }

    /// Return a client with a different request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be rebuilt.
    pub fn with_timeout(self, timeout: Duration) -> Result<Self> {
        let http = Self::http_client(timeout)?;
        Ok(Self { http, ..self })
    }

    fn build(token: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(ClickUpError::ConfigMissing("API token is empty".to_string()));
        }

        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&base_url_str)?;

        // Personal tokens go in verbatim, OAuth tokens as bearer credentials.
        let auth_value = if token.starts_with("pk_") {
            token.to_string()
        } else {
            format!("Bearer {token}")
        };
        let mut auth = HeaderValue::from_str(&auth_value)
            .map_err(|e| ClickUpError::InvalidHeader(e.to_string()))?;
        auth.set_sensitive(true);

        Ok(Self {
            http: Self::http_client(timeout)?,
            base_url: Arc::new(base_url),
            auth,
        })
    }

    fn http_client(timeout: Duration) -> Result<Client> {
        Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(timeout)
            .build()
            .map_err(ClickUpError::HttpError)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request(&self, method: reqwest::Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;
        Ok(self
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.auth.clone()))
    }

    async fn send(builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(ClickUpError::HttpError)?;
        Self::check_response(response).await
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        Self::send(self.request(reqwest::Method::GET, path)?).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: ToQuery + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let pairs = query.to_query();
        Self::send(self.request(reqwest::Method::GET, path)?.query(pairs.as_slice())).await
    }

    /// Make a PUT request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        Self::send(self.request(reqwest::Method::PUT, path)?.json(body)).await
    }

    /// Make a PUT request with JSON body and query parameters.
    #[tracing::instrument(skip(self, query, body))]
    pub async fn put_with_query<Q: ToQuery + ?Sized, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        body: &B,
    ) -> Result<Response> {
        let pairs = query.to_query();
        Self::send(
            self.request(reqwest::Method::PUT, path)?
                .query(pairs.as_slice())
                .json(body),
        )
        .await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        Self::send(self.request(reqwest::Method::POST, path)?.json(body)).await
    }

    /// Make a PATCH request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        Self::send(self.request(reqwest::Method::PATCH, path)?.json(body)).await
    }

    /// Make a POST request with JSON body and query parameters.
    #[tracing::instrument(skip(self, query, body))]
    pub async fn post_with_query<Q: ToQuery + ?Sized, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        body: &B,
    ) -> Result<Response> {
        let pairs = query.to_query();
        Self::send(
            self.request(reqwest::Method::POST, path)?
                .query(pairs.as_slice())
                .json(body),
        )
        .await
    }

    /// Make a POST request with a multipart form body.
    #[tracing::instrument(skip(self, form))]
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<Response> {
        Self::send(self.request(reqwest::Method::POST, path)?.multipart(form)).await
    }

    /// Make a DELETE request.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Self::send(self.request(reqwest::Method::DELETE, path)?).await
    }

    /// Make a DELETE request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn delete_with_query<Q: ToQuery + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let pairs = query.to_query();
        Self::send(self.request(reqwest::Method::DELETE, path)?.query(pairs.as_slice())).await
    }

    /// GET and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        Self::decode(self.get(path).await?).await
    }

    /// GET with query parameters and decode the JSON body.
    pub async fn get_json_with_query<T: DeserializeOwned, Q: ToQuery + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        Self::decode(self.get_with_query(path, query).await?).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        Self::decode(self.post(path, body).await?).await
    }

    /// PUT a JSON body and decode the JSON response.
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        Self::decode(self.put(path, body).await?).await
    }

    /// PATCH a JSON body and decode the JSON response.
    pub async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        Self::decode(self.patch(path, body).await?).await
    }

    /// Decode a JSON body, reading it as text first so parse failures carry
    /// the serde error instead of a transport error.
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await.map_err(ClickUpError::HttpError)?;
        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
        Ok(serde_json::from_str(body)?)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // Handle rate limiting
        if status == StatusCode::TOO_MANY_REQUESTS {
            let reset_at = response
                .headers()
                .get("x-ratelimit-reset")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            tracing::warn!(?reset_at, "ClickUp rate limit reached");
            return Err(ClickUpError::RateLimited { reset_at });
        }

        let (message, error_code) = Self::extract_error(response, status).await;
        tracing::debug!(status = status.as_u16(), ?error_code, %message, "ClickUp request failed");

        Err(match status {
            StatusCode::UNAUTHORIZED => ClickUpError::Unauthorized { message },
            StatusCode::NOT_FOUND => ClickUpError::NotFound {
                message,
                error_code,
            },
            _ => ClickUpError::ApiError {
                message,
                status_code: status.as_u16(),
                error_code,
            },
        })
    }

    /// Extract the `err` message and `ECODE` from a failed response.
    async fn extract_error(response: Response, status: StatusCode) -> (String, Option<String>) {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return (format!("HTTP {status}"), None),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            let code = json
                .get("ECODE")
                .and_then(|c| c.as_str())
                .map(str::to_string);
            for key in ["err", "error", "message"] {
                if let Some(msg) = json.get(key).and_then(|m| m.as_str()) {
                    return (msg.to_string(), code);
                }
            }
            return (body, code);
        }

        if body.is_empty() {
            (format!("HTTP {status}"), None)
        } else {
            (body, None)
        }
    }
}

/// Percent-encode a path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
