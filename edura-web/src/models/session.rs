//! The authenticated session: store, reducer and the login, register and
//! logout operations.
//!
//! Operations receive the store's [`Dispatch`], the API and the durable
//! storage explicitly. The store itself is only ever changed through
//! [`SessionAction`].

use crate::api::{ApiError, AuthApi};
use crate::models::request::RequestState;
use crate::storage::{self, SessionStorage};
use crate::validation::{FieldErrors, LoginForm, RegisterForm};
use shared::models::{AuthResponse, UserProfile};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;
use yewdux::prelude::{Dispatch, Reducer, Store};

/// Message recorded when an authenticated request proves the token stale.
pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";
const STORAGE_FAILURE: &str = "Unable to save your session in this browser";

/// Whether the user is signed in.
///
/// `Unknown` only exists between process start and rehydration from
/// durable storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Readiness {
    #[default]
    Unknown,
    Out,
    In(UserProfile),
}

#[derive(Debug, Clone, PartialEq, Default, Store)]
pub struct SessionState {
    pub readiness: Readiness,
    /// The login or register request in flight or last settled.
    pub request: RequestState,
}

impl SessionState {
    pub fn user(&self) -> Option<&UserProfile> {
        match &self.readiness {
            Readiness::In(user) => Some(user),
            Readiness::Unknown | Readiness::Out => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.readiness, Readiness::In(_))
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_pending()
    }

    pub fn error(&self) -> Option<&str> {
        self.request.error()
    }

    pub fn reduce(&mut self, action: SessionAction) {
        match action {
            SessionAction::Rehydrated(user) => {
                self.readiness = user.map_or(Readiness::Out, Readiness::In);
            }
            SessionAction::Pending => self.request = RequestState::Pending,
            SessionAction::Fulfilled(user) => {
                self.readiness = Readiness::In(user);
                self.request = RequestState::Fulfilled;
            }
            SessionAction::Rejected(message) => self.request = RequestState::Rejected(message),
            SessionAction::LoggedOut => {
                self.readiness = Readiness::Out;
                self.request = RequestState::Idle;
            }
            SessionAction::Expired => {
                self.readiness = Readiness::Out;
                self.request = RequestState::Rejected(SESSION_EXPIRED.to_string());
            }
            SessionAction::ClearError => {
                if self.request.error().is_some() {
                    self.request = RequestState::Idle;
                }
            }
        }
    }
}

/// Transitions of [`SessionState`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Rehydrated(Option<UserProfile>),
    Pending,
    Fulfilled(UserProfile),
    Rejected(String),
    LoggedOut,
    Expired,
    ClearError,
}

impl Reducer<SessionState> for SessionAction {
    fn apply(self, mut state: Rc<SessionState>) -> Rc<SessionState> {
        Rc::make_mut(&mut state).reduce(self);
        state
    }
}

/// Why a login or registration did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The form failed client-side validation; nothing was sent.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
    /// The backend (or storage) rejected the attempt.
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthFlow {
    Login,
    Register,
}

impl AuthFlow {
    fn fallback(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
        }
    }
}

impl fmt::Display for AuthFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Login => "login",
            Self::Register => "registration",
        })
    }
}

/// Restore the session persisted by a previous visit.
pub fn rehydrate(dispatch: &Dispatch<SessionState>, storage: &dyn SessionStorage) {
    let user = storage::load_session(storage).map(|(_, user)| user);
    log::info!("session rehydrated (signed in: {})", user.is_some());
    dispatch.apply(SessionAction::Rehydrated(user));
}

/// Validate the credentials and sign in.
pub async fn login<A>(
    dispatch: &Dispatch<SessionState>,
    api: &A,
    storage: &dyn SessionStorage,
    form: &LoginForm,
) -> Result<UserProfile, SessionError>
where
    A: AuthApi + ?Sized,
{
    let request = form.validate().map_err(SessionError::Invalid)?;
    dispatch.apply(SessionAction::Pending);
    let outcome = api.login(&request).await;
    settle(dispatch, storage, AuthFlow::Login, outcome)
}

/// Validate the profile and create an account, signing in on success.
pub async fn register<A>(
    dispatch: &Dispatch<SessionState>,
    api: &A,
    storage: &dyn SessionStorage,
    form: &RegisterForm,
) -> Result<UserProfile, SessionError>
where
    A: AuthApi + ?Sized,
{
    let request = form.validate().map_err(SessionError::Invalid)?;
    dispatch.apply(SessionAction::Pending);
    let outcome = api.register(&request).await;
    settle(dispatch, storage, AuthFlow::Register, outcome)
}

/// Discard the token locally. No request is made.
pub fn logout(dispatch: &Dispatch<SessionState>, storage: &dyn SessionStorage) {
    storage::clear_session(storage);
    log::info!("signed out");
    dispatch.apply(SessionAction::LoggedOut);
}

/// Sign out because the backend no longer accepts the token.
pub fn expire(dispatch: &Dispatch<SessionState>, storage: &dyn SessionStorage) {
    storage::clear_session(storage);
    log::warn!("session expired");
    dispatch.apply(SessionAction::Expired);
}

/// Expire a signed-in session if `err` shows its token was rejected.
///
/// Public endpoints also answer 401 to a stale token, so any request made
/// with the stored token goes through here. Returns whether it expired.
pub fn expire_if_rejected(
    dispatch: &Dispatch<SessionState>,
    storage: &dyn SessionStorage,
    err: &ApiError,
) -> bool {
    if !err.is_unauthorized() || !dispatch.get().is_authenticated() {
        return false;
    }
    expire(dispatch, storage);
    true
}

fn settle(
    dispatch: &Dispatch<SessionState>,
    storage: &dyn SessionStorage,
    flow: AuthFlow,
    outcome: Result<AuthResponse, ApiError>,
) -> Result<UserProfile, SessionError> {
    let message = match outcome {
        Ok(AuthResponse { token, user }) => match storage::persist_session(storage, &token, &user) {
            Ok(()) => {
                log::info!("{flow} succeeded for {}", user.email);
                dispatch.apply(SessionAction::Fulfilled(user.clone()));
                return Ok(user);
            }
            Err(err) => {
                log::error!("{flow} succeeded but the session was not stored: {err}");
                STORAGE_FAILURE.to_string()
            }
        },
        Err(err) => {
            log::error!("{flow} failed: {err}");
            err.message_or(flow.fallback())
        }
    };

    dispatch.apply(SessionAction::Rejected(message.clone()));
    Err(SessionError::Rejected(message))
}
