//! Courses the signed-in user is enrolled in.

use crate::api::{ApiError, EnrollmentApi};
use crate::models::request::RequestState;
use crate::models::session::{self, SessionState};
use crate::storage::SessionStorage;
use shared::models::{Course, EnrollmentResponse};
use std::rc::Rc;
use yewdux::prelude::{Dispatch, Reducer, Store};

#[derive(Debug, Clone, PartialEq, Default, Store)]
pub struct EnrollmentState {
    pub courses: Vec<Course>,
    pub list: RequestState,
    pub enroll: RequestState,
}

impl EnrollmentState {
    pub fn is_enrolled(&self, course: &Course) -> bool {
        self.courses.iter().any(|enrolled| enrolled.id == course.id)
    }

    pub fn reduce(&mut self, action: EnrollmentAction) {
        match action {
            EnrollmentAction::ListPending => self.list = RequestState::Pending,
            EnrollmentAction::ListFulfilled(courses) => {
                self.courses = courses;
                self.list = RequestState::Fulfilled;
            }
            EnrollmentAction::ListRejected(message) => self.list = RequestState::Rejected(message),
            EnrollmentAction::EnrollPending => self.enroll = RequestState::Pending,
            EnrollmentAction::EnrollFulfilled(course) => {
                if !self.is_enrolled(&course) {
                    self.courses.push(course);
                }
                self.enroll = RequestState::Fulfilled;
            }
            EnrollmentAction::EnrollRejected(message) => {
                self.enroll = RequestState::Rejected(message);
            }
            EnrollmentAction::Reset => *self = Self::default(),
        }
    }
}

/// Transitions of [`EnrollmentState`].
#[derive(Debug, Clone, PartialEq)]
pub enum EnrollmentAction {
    ListPending,
    ListFulfilled(Vec<Course>),
    ListRejected(String),
    EnrollPending,
    EnrollFulfilled(Course),
    EnrollRejected(String),
    /// Drop everything, e.g. after logout.
    Reset,
}

impl Reducer<EnrollmentState> for EnrollmentAction {
    fn apply(self, mut state: Rc<EnrollmentState>) -> Rc<EnrollmentState> {
        Rc::make_mut(&mut state).reduce(self);
        state
    }
}

/// Load the user's enrolled courses.
///
/// A 401 that survives the token refresh ends the session.
pub async fn fetch_my_courses<A>(
    dispatch: &Dispatch<EnrollmentState>,
    session: &Dispatch<SessionState>,
    api: &A,
    storage: &dyn SessionStorage,
) -> Result<Vec<Course>, ApiError>
where
    A: EnrollmentApi + ?Sized,
{
    dispatch.apply(EnrollmentAction::ListPending);
    match api.my_courses().await {
        Ok(courses) => {
            dispatch.apply(EnrollmentAction::ListFulfilled(courses.clone()));
            Ok(courses)
        }
        Err(err) => {
            log::error!("fetching enrolled courses failed: {err}");
            if err.is_unauthorized() {
                session::expire(session, storage);
                dispatch.apply(EnrollmentAction::Reset);
            } else {
                let message = err.message_or("Failed to fetch your courses");
                dispatch.apply(EnrollmentAction::ListRejected(message));
            }
            Err(err)
        }
    }
}

/// Enroll the user in `course`.
pub async fn enroll<A>(
    dispatch: &Dispatch<EnrollmentState>,
    session: &Dispatch<SessionState>,
    api: &A,
    storage: &dyn SessionStorage,
    course: &Course,
) -> Result<EnrollmentResponse, ApiError>
where
    A: EnrollmentApi + ?Sized,
{
    dispatch.apply(EnrollmentAction::EnrollPending);
    match api.enroll(&course.id).await {
        Ok(response) => {
            log::info!("enrolled in course {}", course.id);
            dispatch.apply(EnrollmentAction::EnrollFulfilled(course.clone()));
            Ok(response)
        }
        Err(err) => {
            log::error!("enrolling in course {} failed: {err}", course.id);
            if err.is_unauthorized() {
                session::expire(session, storage);
                dispatch.apply(EnrollmentAction::Reset);
            } else {
                let message = err.message_or("Enrollment failed");
                dispatch.apply(EnrollmentAction::EnrollRejected(message));
            }
            Err(err)
        }
    }
}
