use crate::{
    components::{header_nav_item::HeaderNavItem, user_dropdown::UserDropdown},
    models::session::{Readiness, SessionState},
    routes::MainRoute,
};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let readiness = use_selector(|state: &SessionState| state.readiness.clone());
    let header_routes = MainRoute::nav_routes();

    let render_routes = |routes: &[MainRoute]| -> Html {
        html! {
            { for routes.iter().map(|route| html! {
                <HeaderNavItem
                    current_route={props.current_route.clone()}
                    route={route.clone()}
                />
            }) }
        }
    };

    let account = match &*readiness {
        Readiness::Unknown => html! {},
        Readiness::Out => html! {
            <>
                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">
                    {"Log in"}
                </Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::Register} classes="btn btn-primary btn-sm">
                    {"Sign up"}
                </Link<MainRoute>>
            </>
        },
        Readiness::In(user) => html! {
            <>
                <Link<MainRoute> to={MainRoute::Cart} classes="btn btn-ghost btn-circle">
                    <Icon icon_id={IconId::HeroiconsOutlineShoppingCart} class="w-5 h-5" />
                </Link<MainRoute>>
                <span class="hidden sm:inline text-sm text-base-content/80 mr-2">{ user.display_name() }</span>
                <UserDropdown />
            </>
        },
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                <Icon icon_id={IconId::HeroiconsOutlineAcademicCap} class="w-6 h-6" />
                {"Edura"}
            </Link<MainRoute>>
            <div class="dropdown dropdown-end lg:hidden">
                <button class="btn btn-soft">
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="w-5 h-5" />
                </button>
                <ul
                tabindex="0"
                class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                    { render_routes(&header_routes) }
                </ul>
            </div>
            <ul class="hidden menu lg:menu-horizontal">
                { render_routes(&header_routes) }
            </ul>
            <div class="flex items-center gap-2">
                { account }
            </div>
        </nav>
    }
}
