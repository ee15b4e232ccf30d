//! One state slice per catalog entity, with the fetch operations that feed it.

use crate::api::{ApiError, Filters, ResourceApi};
use crate::models::request::RequestState;
use crate::models::session::{self, SessionState};
use crate::storage::SessionStorage;
use shared::models::{EntityId, Resource};
use std::rc::Rc;
use yewdux::prelude::{Dispatch, Reducer, Store};

/// List and detail state of one entity type.
///
/// The list and detail requests are tracked separately. There is no request
/// identity: whichever response settles last is what the slice shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSlice<E> {
    pub items: Vec<E>,
    pub selected: Option<E>,
    pub list: RequestState,
    pub detail: RequestState,
}

impl<E> Default for ResourceSlice<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            list: RequestState::Idle,
            detail: RequestState::Idle,
        }
    }
}

impl<E> ResourceSlice<E> {
    pub fn reduce(&mut self, action: SliceAction<E>) {
        match action {
            SliceAction::FetchAllPending => self.list = RequestState::Pending,
            SliceAction::FetchAllFulfilled(items) => {
                self.items = items;
                self.list = RequestState::Fulfilled;
            }
            SliceAction::FetchAllRejected(message) => self.list = RequestState::Rejected(message),
            SliceAction::FetchByIdPending => self.detail = RequestState::Pending,
            SliceAction::FetchByIdFulfilled(entity) => {
                self.selected = Some(entity);
                self.detail = RequestState::Fulfilled;
            }
            SliceAction::FetchByIdRejected(message) => {
                self.detail = RequestState::Rejected(message);
            }
            SliceAction::ClearSelected => {
                self.selected = None;
                self.detail = RequestState::Idle;
            }
        }
    }
}

impl<E: Resource> Store for ResourceSlice<E> {
    fn new(_cx: &yewdux::Context) -> Self {
        Self::default()
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

/// Transitions of a [`ResourceSlice`].
#[derive(Debug, Clone, PartialEq)]
pub enum SliceAction<E> {
    FetchAllPending,
    FetchAllFulfilled(Vec<E>),
    FetchAllRejected(String),
    FetchByIdPending,
    FetchByIdFulfilled(E),
    FetchByIdRejected(String),
    ClearSelected,
}

impl<E: Resource> Reducer<ResourceSlice<E>> for SliceAction<E> {
    fn apply(self, mut state: Rc<ResourceSlice<E>>) -> Rc<ResourceSlice<E>> {
        Rc::make_mut(&mut state).reduce(self);
        state
    }
}

/// Load the collection, replacing `items` on success.
///
/// On failure `items` keeps its previous value and the slice records the
/// backend's message or `Failed to fetch <plural>`. A rejected token ends
/// the session.
pub async fn fetch_all<E, A>(
    dispatch: &Dispatch<ResourceSlice<E>>,
    session: &Dispatch<SessionState>,
    api: &A,
    storage: &dyn SessionStorage,
    filters: &Filters,
) -> Result<Vec<E>, ApiError>
where
    E: Resource,
    A: ResourceApi<E> + ?Sized,
{
    dispatch.apply(SliceAction::FetchAllPending);
    match api.fetch_all(filters).await {
        Ok(items) => {
            log::debug!("fetched {} {}", items.len(), E::PLURAL);
            dispatch.apply(SliceAction::FetchAllFulfilled(items.clone()));
            Ok(items)
        }
        Err(err) => {
            log::error!("fetching {} failed: {err}", E::PLURAL);
            session::expire_if_rejected(session, storage, &err);
            let message = err.message_or(format!("Failed to fetch {}", E::PLURAL));
            dispatch.apply(SliceAction::FetchAllRejected(message));
            Err(err)
        }
    }
}

/// Load one entity into `selected`.
pub async fn fetch_by_id<E, A>(
    dispatch: &Dispatch<ResourceSlice<E>>,
    session: &Dispatch<SessionState>,
    api: &A,
    storage: &dyn SessionStorage,
    id: &EntityId,
) -> Result<E, ApiError>
where
    E: Resource,
    A: ResourceApi<E> + ?Sized,
{
    dispatch.apply(SliceAction::FetchByIdPending);
    match api.fetch_by_id(id).await {
        Ok(entity) => {
            dispatch.apply(SliceAction::FetchByIdFulfilled(entity.clone()));
            Ok(entity)
        }
        Err(err) => {
            log::error!("fetching {} {id} failed: {err}", E::SINGULAR);
            session::expire_if_rejected(session, storage, &err);
            let message = err.message_or(format!("Failed to fetch {}", E::SINGULAR));
            dispatch.apply(SliceAction::FetchByIdRejected(message));
            Err(err)
        }
    }
}

/// Forget the selected entity when leaving a detail view.
pub fn clear_selected<E: Resource>(dispatch: &Dispatch<ResourceSlice<E>>) {
    dispatch.apply(SliceAction::ClearSelected);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::{Readiness, SESSION_EXPIRED};
    use crate::storage::{MemoryStorage, TOKEN_KEY, persist_session};
    use crate::test_support::{FakeResourceApi, course, profile};
    use futures::executor::block_on;
    use shared::models::Course;
    use std::pin::pin;
    use yewdux::Context;

    struct Harness {
        courses: Dispatch<ResourceSlice<Course>>,
        session: Dispatch<SessionState>,
        storage: MemoryStorage,
    }

    impl Harness {
        fn signed_out() -> Self {
            let cx = Context::new();
            let storage = MemoryStorage::default();
            let session = Dispatch::new(&cx);
            session::rehydrate(&session, &storage);
            Self {
                courses: Dispatch::new(&cx),
                session,
                storage,
            }
        }

        fn signed_in(token: &str) -> Self {
            let harness = Self::signed_out();
            persist_session(&harness.storage, token, &profile()).unwrap();
            session::rehydrate(&harness.session, &harness.storage);
            harness
        }

        fn fetch_all(
            &self,
            api: &FakeResourceApi<Course>,
            filters: &Filters,
        ) -> Result<Vec<Course>, ApiError> {
            block_on(fetch_all(
                &self.courses,
                &self.session,
                api,
                &self.storage,
                filters,
            ))
        }

        fn fetch_by_id(
            &self,
            api: &FakeResourceApi<Course>,
            id: &str,
        ) -> Result<Course, ApiError> {
            block_on(fetch_by_id(
                &self.courses,
                &self.session,
                api,
                &self.storage,
                &EntityId::new(id),
            ))
        }
    }

    #[test]
    fn test_fetch_all_replaces_items() {
        let harness = Harness::signed_out();
        let api = FakeResourceApi::default();
        api.push_list(Ok(vec![course("1", "Rust"), course("2", "Go")]));
        api.push_list(Ok(vec![course("3", "Zig")]));

        harness.fetch_all(&api, &Filters::new()).unwrap();
        assert_eq!(harness.courses.get().items.len(), 2);

        harness.fetch_all(&api, &Filters::new()).unwrap();
        let state = harness.courses.get();
        assert_eq!(state.items, vec![course("3", "Zig")]);
        assert_eq!(state.list, RequestState::Fulfilled);
    }

    #[test]
    fn test_filters_are_forwarded() {
        let harness = Harness::signed_out();
        let api = FakeResourceApi::default();
        api.push_list(Ok(Vec::new()));
        let filters = Filters::new().with("category", "design").page(2);

        harness.fetch_all(&api, &filters).unwrap();
        assert_eq!(api.list_calls.borrow().as_slice(), &[filters]);
    }

    #[test]
    fn test_rejected_fetch_all_keeps_previous_items() {
        let harness = Harness::signed_out();
        let api = FakeResourceApi::default();
        api.push_list(Ok(vec![course("1", "Rust")]));
        api.push_list(Err(ApiError::Status {
            status: 500,
            message: Some("Database unavailable".to_string()),
        }));
        api.push_list(Err(ApiError::Network("offline".to_string())));

        harness.fetch_all(&api, &Filters::new()).unwrap();
        harness.fetch_all(&api, &Filters::new()).unwrap_err();

        let state = harness.courses.get();
        assert_eq!(state.items, vec![course("1", "Rust")]);
        assert_eq!(state.list.error(), Some("Database unavailable"));

        harness.fetch_all(&api, &Filters::new()).unwrap_err();
        let state = harness.courses.get();
        assert_eq!(state.items, vec![course("1", "Rust")]);
        assert_eq!(state.list.error(), Some("Failed to fetch courses"));
    }

    #[test]
    fn test_fetch_by_id_not_found_sets_error() {
        let harness = Harness::signed_out();
        let api = FakeResourceApi::<Course>::default();

        let err = harness.fetch_by_id(&api, "missing").unwrap_err();

        assert!(matches!(err, ApiError::NotFound { .. }));
        let state = harness.courses.get();
        assert_eq!(state.selected, None);
        assert_eq!(state.detail.error(), Some("Failed to fetch course"));
    }

    #[test]
    fn test_rejected_token_expires_the_session() {
        let harness = Harness::signed_in("stale");
        let api = FakeResourceApi::<Course>::default();
        api.push_list(Err(ApiError::Unauthorized { message: None }));

        let err = harness.fetch_all(&api, &Filters::new()).unwrap_err();

        assert!(err.is_unauthorized());
        let session = harness.session.get();
        assert_eq!(session.readiness, Readiness::Out);
        assert_eq!(session.error(), Some(SESSION_EXPIRED));
        assert!(!harness.storage.contains(TOKEN_KEY));
        assert_eq!(harness.courses.get().list.error(), Some("Failed to fetch courses"));
    }

    #[test]
    fn test_rejected_token_on_detail_expires_the_session() {
        let harness = Harness::signed_in("stale");
        let api = FakeResourceApi::<Course>::default();
        let sender = api.gate_detail("1");
        sender
            .send(Err(ApiError::Unauthorized { message: None }))
            .unwrap();

        harness.fetch_by_id(&api, "1").unwrap_err();

        assert_eq!(harness.session.get().readiness, Readiness::Out);
        assert!(!harness.storage.contains(TOKEN_KEY));
    }

    #[test]
    fn test_unauthorized_while_signed_out_leaves_session_alone() {
        let harness = Harness::signed_out();
        let api = FakeResourceApi::<Course>::default();
        api.push_list(Err(ApiError::Unauthorized { message: None }));

        harness.fetch_all(&api, &Filters::new()).unwrap_err();

        let session = harness.session.get();
        assert_eq!(session.readiness, Readiness::Out);
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_out_of_order_details_last_resolution_wins() {
        let harness = Harness::signed_out();
        let api = FakeResourceApi::default();
        let first = api.gate_detail("1");
        let second = api.gate_detail("2");
        let first_id = EntityId::new("1");
        let second_id = EntityId::new("2");

        block_on(async {
            let mut first_request = pin!(fetch_by_id(
                &harness.courses,
                &harness.session,
                &api,
                &harness.storage,
                &first_id
            ));
            let mut second_request = pin!(fetch_by_id(
                &harness.courses,
                &harness.session,
                &api,
                &harness.storage,
                &second_id
            ));
            assert!(futures::poll!(first_request.as_mut()).is_pending());
            assert!(futures::poll!(second_request.as_mut()).is_pending());

            second.send(Ok(course("2", "Newer"))).unwrap();
            second_request.await.unwrap();
            assert_eq!(harness.courses.get().selected, Some(course("2", "Newer")));

            first.send(Ok(course("1", "Stale"))).unwrap();
            first_request.await.unwrap();
        });

        assert_eq!(harness.courses.get().selected, Some(course("1", "Stale")));
    }

    #[test]
    fn test_clear_selected() {
        let harness = Harness::signed_out();
        let api = FakeResourceApi::default();
        let sender = api.gate_detail("1");
        sender.send(Ok(course("1", "Rust"))).unwrap();
        harness.fetch_by_id(&api, "1").unwrap();
        assert!(harness.courses.get().selected.is_some());

        clear_selected(&harness.courses);
        let state = harness.courses.get();
        assert_eq!(state.selected, None);
        assert_eq!(state.detail, RequestState::Idle);
    }

    #[test]
    fn test_detail_error_does_not_touch_list() {
        let mut slice = ResourceSlice::default();
        slice.reduce(SliceAction::FetchAllFulfilled(vec![course("1", "Rust")]));
        slice.reduce(SliceAction::FetchByIdRejected("gone".to_string()));

        assert_eq!(slice.list, RequestState::Fulfilled);
        assert_eq!(slice.items.len(), 1);
        assert_eq!(slice.detail.error(), Some("gone"));
        assert_eq!(slice.list.error(), None);
    }

    #[test]
    fn test_pending_clears_previous_error() {
        let mut slice: ResourceSlice<Course> = ResourceSlice::default();
        slice.reduce(SliceAction::FetchAllRejected("boom".to_string()));
        slice.reduce(SliceAction::FetchAllPending);

        assert!(slice.list.is_pending());
        assert_eq!(slice.list.error(), None);
    }
}
