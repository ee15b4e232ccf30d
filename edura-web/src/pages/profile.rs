use crate::api::EduraClient;
use crate::components::{Loading, ResourceCard};
use crate::models::enrollment::{self, EnrollmentState};
use crate::models::session::SessionState;
use shared::models::Course;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yewdux::prelude::{use_dispatch, use_selector, use_store_value};

/// Profile page listing the user's enrolled courses
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let user = use_selector(|state: &SessionState| state.user().cloned());
    let session_dispatch = use_dispatch::<SessionState>();
    let dispatch = use_dispatch::<EnrollmentState>();
    let enrollments = use_store_value::<EnrollmentState>();

    use_effect_with((), move |_| {
        spawn_local(async move {
            let client = EduraClient::shared();
            let _ = enrollment::fetch_my_courses(
                &dispatch,
                &session_dispatch,
                &client,
                client.storage(),
            )
            .await;
        });
        || ()
    });

    let Some(user) = (*user).clone() else {
        return html! {};
    };

    let courses = if enrollments.list.is_pending() && enrollments.courses.is_empty() {
        html! { <Loading label="Loading your courses" /> }
    } else if enrollments.courses.is_empty() {
        html! { <p class="text-base-content/70">{ "You are not enrolled in any course yet." }</p> }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for enrollments.courses.iter().map(|course| html! {
                    <ResourceCard<Course> key={course.id.to_string()} item={course.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <div class="p-4 space-y-6">
            <div class="card bg-base-200">
                <div class="card-body">
                    <h1 class="card-title text-2xl">{ user.display_name() }</h1>
                    <p class="text-base-content/70">{ &user.email }</p>
                </div>
            </div>
            <h2 class="text-xl font-bold">{ "My courses" }</h2>
            if let Some(message) = enrollments.list.error() {
                <div class="alert alert-error"><span>{ message.to_string() }</span></div>
            }
            { courses }
        </div>
    }
}
