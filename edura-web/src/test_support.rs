//! Fakes for the API traits, shared by the store tests.

use crate::api::{ApiError, AuthApi, EnrollmentApi, Filters, ResourceApi};
use async_trait::async_trait;
use futures::channel::oneshot;
use shared::models::{
    AuthResponse, Course, EnrollmentResponse, EntityId, LoginRequest, RegisterRequest, Resource,
    UserProfile,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

pub fn profile() -> UserProfile {
    UserProfile {
        id: EntityId::new("u-1"),
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        ..Default::default()
    }
}

pub fn auth_response(token: &str) -> AuthResponse {
    AuthResponse {
        token: token.to_string(),
        user: profile(),
    }
}

pub fn course(id: &str, title: &str) -> Course {
    Course {
        id: EntityId::new(id),
        title: title.to_string(),
        ..Default::default()
    }
}

/// Answers every auth call with the same outcome and counts the calls.
pub struct FakeAuthApi {
    outcome: Result<AuthResponse, ApiError>,
    calls: Cell<usize>,
}

impl FakeAuthApi {
    pub fn succeeding() -> Self {
        Self {
            outcome: Ok(auth_response("token-123")),
            calls: Cell::new(0),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            outcome: Err(error),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn answer(&self) -> Result<AuthResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone()
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.answer()
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.answer()
    }
}

type AuthOutcome = Result<AuthResponse, ApiError>;

/// Login answers only once the test sends the outcome.
pub struct GatedAuthApi {
    receiver: RefCell<Option<oneshot::Receiver<AuthOutcome>>>,
}

impl GatedAuthApi {
    pub fn new(receiver: oneshot::Receiver<AuthOutcome>) -> Self {
        Self {
            receiver: RefCell::new(Some(receiver)),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for GatedAuthApi {
    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let receiver = self.receiver.borrow_mut().take();
        match receiver {
            Some(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("cancelled".to_string()))),
            None => Err(ApiError::Network("already used".to_string())),
        }
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        Err(ApiError::Network("not scripted".to_string()))
    }
}

/// Resource endpoints with scripted list outcomes and per-id gated details.
pub struct FakeResourceApi<E> {
    lists: RefCell<Vec<Result<Vec<E>, ApiError>>>,
    details: RefCell<HashMap<EntityId, oneshot::Receiver<Result<E, ApiError>>>>,
    pub list_calls: RefCell<Vec<Filters>>,
}

impl<E> Default for FakeResourceApi<E> {
    fn default() -> Self {
        Self {
            lists: RefCell::new(Vec::new()),
            details: RefCell::new(HashMap::new()),
            list_calls: RefCell::new(Vec::new()),
        }
    }
}

impl<E> FakeResourceApi<E> {
    /// Queue the outcome of the next `fetch_all`.
    pub fn push_list(&self, outcome: Result<Vec<E>, ApiError>) {
        self.lists.borrow_mut().push(outcome);
    }

    /// Register a detail request that resolves when the returned sender fires.
    pub fn gate_detail(&self, id: &str) -> oneshot::Sender<Result<E, ApiError>> {
        let (sender, receiver) = oneshot::channel();
        self.details.borrow_mut().insert(EntityId::new(id), receiver);
        sender
    }
}

#[async_trait(?Send)]
impl<E: Resource> ResourceApi<E> for FakeResourceApi<E> {
    async fn fetch_all(&self, filters: &Filters) -> Result<Vec<E>, ApiError> {
        self.list_calls.borrow_mut().push(filters.clone());
        let mut lists = self.lists.borrow_mut();
        if lists.is_empty() {
            return Err(ApiError::Network("no scripted list".to_string()));
        }
        lists.remove(0)
    }

    async fn fetch_by_id(&self, id: &EntityId) -> Result<E, ApiError> {
        let receiver = self.details.borrow_mut().remove(id);
        match receiver {
            Some(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("cancelled".to_string()))),
            None => Err(ApiError::NotFound { message: None }),
        }
    }
}

/// Enrollment endpoints answering from fixed outcomes.
pub struct FakeEnrollmentApi {
    pub my_courses: Result<Vec<Course>, ApiError>,
    pub enroll: Result<EnrollmentResponse, ApiError>,
}

#[async_trait(?Send)]
impl EnrollmentApi for FakeEnrollmentApi {
    async fn enroll(&self, _course_id: &EntityId) -> Result<EnrollmentResponse, ApiError> {
        self.enroll.clone()
    }

    async fn my_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.my_courses.clone()
    }
}
