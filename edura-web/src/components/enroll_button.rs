use crate::api::EduraClient;
use crate::models::enrollment::{self, EnrollmentState};
use crate::models::session::{Readiness, SessionState};
use crate::routes::{LoginRedirect, MainRoute};
use shared::models::Course;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector, use_store_value};

#[derive(Properties, PartialEq)]
pub struct EnrollButtonProps {
    pub course: Course,
}

/// Query sending a visitor back to `course` after logging in.
fn login_redirect(course: &Course) -> LoginRedirect {
    LoginRedirect {
        from: Some(
            MainRoute::Course {
                id: course.id.to_string(),
            }
            .to_path(),
        ),
    }
}

/// Enroll the signed-in user in a course, or send a visitor to log in first.
#[function_component(EnrollButton)]
pub fn enroll_button(props: &EnrollButtonProps) -> Html {
    let navigator = use_navigator();
    let readiness = use_selector(|state: &SessionState| state.readiness.clone());
    let session_dispatch = use_dispatch::<SessionState>();
    let dispatch = use_dispatch::<EnrollmentState>();
    let enrollments = use_store_value::<EnrollmentState>();

    if enrollments.is_enrolled(&props.course) {
        return html! { <span class="badge badge-success badge-lg">{"Enrolled"}</span> };
    }

    let onclick = {
        let course = props.course.clone();
        let signed_in = matches!(*readiness, Readiness::In(_));
        Callback::from(move |_: MouseEvent| {
            if !signed_in {
                if let Some(navigator) = &navigator {
                    let redirect = login_redirect(&course);
                    if let Err(err) = navigator.push_with_query(&MainRoute::Login, &redirect) {
                        log::error!("navigation to login failed: {err}");
                    }
                }
                return;
            }
            let course = course.clone();
            let dispatch = dispatch.clone();
            let session_dispatch = session_dispatch.clone();
            spawn_local(async move {
                let client = EduraClient::shared();
                let _ = enrollment::enroll(
                    &dispatch,
                    &session_dispatch,
                    &client,
                    client.storage(),
                    &course,
                )
                .await;
            });
        })
    };

    let busy = enrollments.enroll.is_pending();

    html! {
        <div class="flex flex-col items-end gap-2">
            if let Some(message) = enrollments.enroll.error() {
                <span class="text-error text-sm">{ message.to_string() }</span>
            }
            <button class="btn btn-primary" disabled={busy} {onclick}>
                { if busy { "Enrolling..." } else { "Enroll now" } }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::post_login_target;
    use crate::test_support::course;

    #[test]
    fn test_login_redirect_returns_to_the_course() {
        let redirect = login_redirect(&course("7", "Rust"));
        assert_eq!(redirect.from.as_deref(), Some("/courses/7"));
        assert_eq!(
            post_login_target(redirect.from.as_deref()),
            MainRoute::Course { id: "7".to_string() }
        );
    }
}
