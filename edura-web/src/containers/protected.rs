use crate::components::Loading;
use crate::models::session::SessionState;
use crate::routes::{GuardDecision, MainRoute, guard};
use yew::{Children, Html, Properties, function_component, html, use_effect_with};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct ProtectedProps {
    pub route: MainRoute,
    pub children: Children,
}

/// Renders its children only for a signed-in user.
///
/// A signed-out visitor is sent to `/login?from=<path>`; while the session is
/// still being restored a placeholder is shown instead.
#[function_component(Protected)]
pub fn protected(props: &ProtectedProps) -> Html {
    let navigator = use_navigator();
    let readiness = use_selector(|state: &SessionState| state.readiness.clone());
    let decision = guard(&props.route, &readiness);

    use_effect_with(decision.clone(), move |decision| {
        if let (GuardDecision::RedirectToLogin(redirect), Some(navigator)) = (decision, navigator) {
            log::debug!("redirecting to login from {:?}", redirect.from);
            if let Err(err) = navigator.replace_with_query(&MainRoute::Login, redirect) {
                log::error!("redirect to login failed: {err}");
            }
        }
        || ()
    });

    match decision {
        GuardDecision::Render => html! { <>{ props.children.clone() }</> },
        GuardDecision::Wait | GuardDecision::RedirectToLogin(_) => html! { <Loading /> },
    }
}
