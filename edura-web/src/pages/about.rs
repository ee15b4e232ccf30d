use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// About page component
#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="p-4 space-y-6 max-w-3xl">
            <h1 class="text-2xl font-bold">{ "About Edura" }</h1>
            <p>
                { "Edura is an online school. Our instructors teach what they practice, \
                   and every course is built around projects you can finish." }
            </p>
            <p>
                { "Meet the people behind the courses on the " }
                <Link<MainRoute> to={MainRoute::Instructors} classes="link link-primary">{ "instructors page" }</Link<MainRoute>>
                { "." }
            </p>
        </div>
    }
}
