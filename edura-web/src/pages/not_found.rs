use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// Shown for any path outside the route table
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="p-4 space-y-6 text-center">
            <h1 class="text-4xl font-bold">{ "Page not found" }</h1>
            <p>{ "The page you are looking for does not exist." }</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">{ "Back to home" }</Link<MainRoute>>
        </div>
    }
}
