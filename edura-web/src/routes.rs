use crate::containers::layout::Layout;
use crate::containers::protected::Protected;
use crate::containers::resource_detail::ResourceDetail;
use crate::containers::resource_list::ResourceList;
use crate::models::session::Readiness;
use crate::pages::*;
use serde::{Deserialize, Serialize};
use shared::models::{BlogPost, Course, EntityId, Event, Instructor, Product};
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/courses")]
    Courses,
    #[at("/courses/:id")]
    Course { id: String },
    #[at("/instructors")]
    Instructors,
    #[at("/instructors/:id")]
    Instructor { id: String },
    #[at("/events")]
    Events,
    #[at("/events/:id")]
    Event { id: String },
    #[at("/blog")]
    Blog,
    #[at("/blog/:id")]
    BlogPost { id: String },
    #[at("/shop")]
    Shop,
    #[at("/contact")]
    Contact,
    #[at("/about")]
    About,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/cart")]
    Cart,
    #[at("/checkout")]
    Checkout,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Routes that only render for a signed-in user.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Cart | Self::Checkout | Self::Profile)
    }

    /// Routes listed in the header navigation, in display order.
    pub fn nav_routes() -> Vec<Self> {
        Self::iter().filter(|route| route.nav_label().is_some()).collect()
    }

    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("Home"),
            Self::Courses => Some("Courses"),
            Self::Instructors => Some("Instructors"),
            Self::Events => Some("Events"),
            Self::Blog => Some("Blog"),
            Self::Shop => Some("Shop"),
            Self::Contact => Some("Contact"),
            Self::About => Some("About"),
            _ => None,
        }
    }

    pub fn nav_icon(&self) -> IconId {
        match self {
            Self::Courses | Self::Course { .. } => IconId::HeroiconsOutlineAcademicCap,
            Self::Instructors | Self::Instructor { .. } => IconId::HeroiconsOutlineUserGroup,
            Self::Events | Self::Event { .. } => IconId::HeroiconsOutlineCalendar,
            Self::Blog | Self::BlogPost { .. } => IconId::HeroiconsOutlineNewspaper,
            Self::Shop => IconId::HeroiconsOutlineShoppingBag,
            Self::Contact => IconId::HeroiconsOutlineEnvelope,
            Self::About => IconId::HeroiconsOutlineInformationCircle,
            Self::Cart | Self::Checkout => IconId::HeroiconsOutlineShoppingCart,
            Self::Profile | Self::Login | Self::Register => IconId::HeroiconsOutlineUser,
            Self::Home | Self::NotFound => IconId::HeroiconsOutlineHome,
        }
    }

    /// The navigation entry a route belongs to; detail pages map to their list.
    pub fn section(&self) -> Self {
        match self {
            Self::Course { .. } => Self::Courses,
            Self::Instructor { .. } => Self::Instructors,
            Self::Event { .. } => Self::Events,
            Self::BlogPost { .. } => Self::Blog,
            other => other.clone(),
        }
    }
}

/// Query string carried to `/login` by a guarded redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRedirect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// What a view should do for the current session readiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Session not rehydrated yet; show a placeholder.
    Wait,
    RedirectToLogin(LoginRedirect),
}

/// Decide whether `route` may render.
pub fn guard(route: &MainRoute, readiness: &Readiness) -> GuardDecision {
    if !route.is_protected() {
        return GuardDecision::Render;
    }
    match readiness {
        Readiness::In(_) => GuardDecision::Render,
        Readiness::Unknown => GuardDecision::Wait,
        Readiness::Out => GuardDecision::RedirectToLogin(LoginRedirect {
            from: Some(route.to_path()),
        }),
    }
}

/// Where to go after signing in, given the `from` query value.
///
/// Only in-app paths that resolve to a real page are honoured. Anything else,
/// including the auth pages themselves, falls back to home.
pub fn post_login_target(from: Option<&str>) -> MainRoute {
    let Some(from) = from else {
        return MainRoute::Home;
    };
    if !from.starts_with('/') || from.starts_with("//") {
        log::warn!("ignoring off-site login target {from}");
        return MainRoute::Home;
    }
    let path = from.split(['?', '#']).next().unwrap_or_default();
    match MainRoute::recognize(path) {
        Some(MainRoute::Login | MainRoute::Register | MainRoute::NotFound) | None => {
            MainRoute::Home
        }
        Some(route) => route,
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route {route:?}");
    let current_route = route.clone();
    let page = match route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Courses => html! { <ResourceList<Course> /> },
        MainRoute::Course { id } => html! { <ResourceDetail<Course> id={EntityId::from(id)} /> },
        MainRoute::Instructors => html! { <ResourceList<Instructor> /> },
        MainRoute::Instructor { id } => {
            html! { <ResourceDetail<Instructor> id={EntityId::from(id)} /> }
        }
        MainRoute::Events => html! { <ResourceList<Event> /> },
        MainRoute::Event { id } => html! { <ResourceDetail<Event> id={EntityId::from(id)} /> },
        MainRoute::Blog => html! { <ResourceList<BlogPost> /> },
        MainRoute::BlogPost { id } => {
            html! { <ResourceDetail<BlogPost> id={EntityId::from(id)} /> }
        }
        MainRoute::Shop => html! { <ResourceList<Product> /> },
        MainRoute::Contact => html! { <ContactPage /> },
        MainRoute::About => html! { <AboutPage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Register => html! { <RegisterPage /> },
        MainRoute::Cart => html! { <Protected route={MainRoute::Cart}><CartPage /></Protected> },
        MainRoute::Checkout => {
            html! { <Protected route={MainRoute::Checkout}><CheckoutPage /></Protected> }
        }
        MainRoute::Profile => {
            html! { <Protected route={MainRoute::Profile}><ProfilePage /></Protected> }
        }
        MainRoute::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <Layout {current_route}>
            {page}
        </Layout>
    }
}
