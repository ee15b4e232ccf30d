use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

struct Feature {
    icon: IconId,
    title: &'static str,
    description: &'static str,
    route: MainRoute,
    action: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: IconId::HeroiconsOutlineAcademicCap,
        title: "Courses",
        description: "Self-paced courses taught by working professionals.",
        route: MainRoute::Courses,
        action: "Browse courses",
    },
    Feature {
        icon: IconId::HeroiconsOutlineCalendar,
        title: "Events",
        description: "Workshops and meetups, online and in person.",
        route: MainRoute::Events,
        action: "See events",
    },
    Feature {
        icon: IconId::HeroiconsOutlineNewspaper,
        title: "Blog",
        description: "News and study tips from our instructors.",
        route: MainRoute::Blog,
        action: "Read the blog",
    },
];

/// Home page component
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="p-4 space-y-10">
            <section class="hero bg-base-200 rounded-box py-16">
                <div class="hero-content text-center">
                    <div class="max-w-xl space-y-4">
                        <h1 class="text-5xl font-bold">{"Learn without limits"}</h1>
                        <p class="text-lg">
                            {"Build real skills with courses, events and a community of instructors."}
                        </p>
                        <Link<MainRoute> to={MainRoute::Courses} classes="btn btn-primary">
                            {"Get started"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </section>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="card bg-base-200 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">
                                <Icon icon_id={feature.icon} class="w-6 h-6" />
                                { feature.title }
                            </h2>
                            <p>{ feature.description }</p>
                            <div class="card-actions justify-end">
                                <Link<MainRoute> to={feature.route.clone()} classes="btn btn-secondary">
                                    { feature.action }
                                </Link<MainRoute>>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
