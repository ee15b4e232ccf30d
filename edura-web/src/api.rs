use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::models::{
    AuthResponse, Course, EnrollmentResponse, EntityId, ErrorResponse, LoginRequest,
    RefreshRequest, RefreshResponse, RegisterRequest, Resource,
};
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

use crate::config::FrontendConfig;
use crate::storage::{BrowserStorage, SessionStorage, TOKEN_KEY, stored_token};

thread_local! {
    static SHARED_CLIENT: OnceCell<EduraClient> = OnceCell::new();
}

/// Failures talking to the REST backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// 401, after any token refresh was attempted.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },
    /// 404.
    #[error("not found")]
    NotFound { message: Option<String> },
    /// Any other non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// A success response whose body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the backend's error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// The backend's message, or `fallback` when it sent none.
    pub fn message_or(&self, fallback: impl Into<String>) -> String {
        self.server_message()
            .map_or_else(|| fallback.into(), ToString::to_string)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    fn from_status(status: StatusCode, body: &str) -> Self {
        let message = ErrorResponse::message_from_body(body);
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized { message },
            StatusCode::NOT_FOUND => Self::NotFound { message },
            _ => Self::Status {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Map a status and raw body to the decoded payload or an [`ApiError`].
pub(crate) fn parse_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<T, ApiError> {
    if !status.is_success() {
        return Err(ApiError::from_status(status, body));
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Opaque query parameters forwarded to list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// One-based page number.
    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.with("page", page)
    }

    /// Page size.
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.with("limit", limit)
    }

    pub(crate) fn pairs(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect()
    }
}

/// Authentication endpoints.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
}

/// List and detail endpoints of one catalog entity.
#[async_trait(?Send)]
pub trait ResourceApi<E: Resource> {
    async fn fetch_all(&self, filters: &Filters) -> Result<Vec<E>, ApiError>;
    async fn fetch_by_id(&self, id: &EntityId) -> Result<E, ApiError>;
}

/// Authenticated course enrollment endpoints.
#[async_trait(?Send)]
pub trait EnrollmentApi {
    async fn enroll(&self, course_id: &EntityId) -> Result<EnrollmentResponse, ApiError>;
    async fn my_courses(&self) -> Result<Vec<Course>, ApiError>;
}

/// HTTP client for the Edura REST backend.
///
/// The bearer token is read from durable storage on every request, so a
/// login, logout or refresh is picked up without rebuilding the client.
#[derive(Clone, Debug)]
pub struct EduraClient {
    base_url: String,
    client: Client,
    storage: Rc<dyn SessionStorage>,
}

impl EduraClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str, storage: Rc<dyn SessionStorage>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            storage,
        }
    }

    /// Client shared by every component, backed by `localStorage`.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::new();
                Self::new(&config.api_base_url(), Rc::new(BrowserStorage))
            })
            .clone()
        })
    }

    /// The storage the client reads its token from.
    pub fn storage(&self) -> &dyn SessionStorage {
        self.storage.as_ref()
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `base_url` followed by `segments`, each percent-encoded as one path segment.
    pub(crate) fn segment_url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| ApiError::Network(format!("invalid API base URL: {err}")))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::Network("API base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send_authorized<T, F>(&self, build: F) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        refresh_on_unauthorized(
            self.storage(),
            |token| {
                let request = match token {
                    Some(token) => build().bearer_auth(token),
                    None => build(),
                };
                async move {
                    match request.send().await {
                        Ok(response) => Self::read(response).await,
                        Err(err) => Err(ApiError::from(err)),
                    }
                }
            },
            |token| self.refresh_token(token),
        )
        .await
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        parse_response(status, &body)
    }

    /// Exchange `token` for a fresh one.
    async fn refresh_token(&self, token: String) -> Result<String, ApiError> {
        let url = self.api_url("auth/refresh");
        let response = self
            .client
            .post(url)
            .json(&RefreshRequest { token })
            .send()
            .await?;
        let body: RefreshResponse = Self::read(response).await?;
        body.token.ok_or(ApiError::Unauthorized { message: None })
    }
}

/// Run an authenticated request, refreshing the token once on a 401.
///
/// `send` is given the bearer token to attach. When it fails with
/// [`ApiError::Unauthorized`] while a token is stored, `refresh` exchanges
/// that token and `send` runs once more with the new one. The new token is
/// also written to `storage`; if that write fails the retry still uses it.
/// A failed refresh or a second 401 ends as `Unauthorized`.
pub(crate) async fn refresh_on_unauthorized<T, S, SF, R, RF>(
    storage: &dyn SessionStorage,
    send: S,
    refresh: R,
) -> Result<T, ApiError>
where
    S: Fn(Option<String>) -> SF,
    SF: Future<Output = Result<T, ApiError>>,
    R: FnOnce(String) -> RF,
    RF: Future<Output = Result<String, ApiError>>,
{
    let token = stored_token(storage);
    let outcome = send(token.clone()).await;
    let Some(stale) = token else {
        return outcome;
    };
    if !matches!(outcome, Err(ApiError::Unauthorized { .. })) {
        return outcome;
    }

    log::info!("request rejected with 401, refreshing token");
    let fresh = match refresh(stale).await {
        Ok(fresh) => fresh,
        Err(err) => {
            log::warn!("token refresh failed: {err}");
            return Err(ApiError::Unauthorized { message: None });
        }
    };
    if let Err(err) = storage.set(TOKEN_KEY, &fresh) {
        log::warn!("refreshed token could not be stored: {err}");
    }
    send(Some(fresh)).await
}

#[async_trait(?Send)]
impl AuthApi for EduraClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("auth/login");
        let response = self.client.post(url).json(request).send().await?;
        Self::read(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("auth/register");
        let response = self.client.post(url).json(request).send().await?;
        Self::read(response).await
    }
}

#[async_trait(?Send)]
impl<E: Resource> ResourceApi<E> for EduraClient {
    async fn fetch_all(&self, filters: &Filters) -> Result<Vec<E>, ApiError> {
        let url = self.segment_url(&[E::PATH])?;
        let query = filters.pairs();
        self.send_authorized(|| self.client.get(url.clone()).query(&query))
            .await
    }

    async fn fetch_by_id(&self, id: &EntityId) -> Result<E, ApiError> {
        let url = self.segment_url(&[E::PATH, id.as_str()])?;
        self.send_authorized(|| self.client.get(url.clone())).await
    }
}

#[async_trait(?Send)]
impl EnrollmentApi for EduraClient {
    async fn enroll(&self, course_id: &EntityId) -> Result<EnrollmentResponse, ApiError> {
        let url = self.segment_url(&[Course::PATH, course_id.as_str(), "enroll"])?;
        self.send_authorized(|| self.client.post(url.clone())).await
    }

    async fn my_courses(&self) -> Result<Vec<Course>, ApiError> {
        let url = self.segment_url(&[Course::PATH, "my-courses"])?;
        self.send_authorized(|| self.client.get(url.clone())).await
    }
}
