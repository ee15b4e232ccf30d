use crate::api::EduraClient;
use crate::models::session::{self, SessionState};
use crate::routes::{MainRoute, switch};
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

#[function_component(App)]
pub fn app() -> Html {
    let session_dispatch = use_dispatch::<SessionState>();

    // Restore the persisted session before any guarded view decides.
    use_effect_with((), move |_| {
        let client = EduraClient::shared();
        session::rehydrate(&session_dispatch, client.storage());
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
