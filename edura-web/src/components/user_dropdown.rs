use crate::{
    api::EduraClient,
    models::enrollment::{EnrollmentAction, EnrollmentState},
    models::session::{self, SessionState},
    routes::MainRoute,
};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_dispatch, use_selector};

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let session_dispatch = use_dispatch::<SessionState>();
    let enrollment_dispatch = use_dispatch::<EnrollmentState>();
    let user_state = use_selector(|state: &SessionState| state.user().cloned());
    let Some(user) = (*user_state).clone() else {
        return html! {};
    };

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let client = EduraClient::shared();
            session::logout(&session_dispatch, client.storage());
            enrollment_dispatch.apply(EnrollmentAction::Reset);
            if let Some(navigator) = &navigator {
                navigator.push(&MainRoute::Home);
            }
        });
        html! {
            <li><a {onclick}>{"Log out"}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <Icon icon_id={IconId::HeroiconsOutlineUser} class="w-5 h-5" />
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ user.display_name() }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                </li>
                <div class="divider my-0"></div>
                <li><Link<MainRoute> to={MainRoute::Profile}>{"My courses"}</Link<MainRoute>></li>
                <li><Link<MainRoute> to={MainRoute::Cart}>{"Cart"}</Link<MainRoute>></li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
