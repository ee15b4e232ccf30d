use yew::{Html, Properties, classes, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub route: MainRoute,
    pub current_route: Option<MainRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let route_name = props.route.nav_label().unwrap_or_default();

    let is_active = props
        .current_route
        .as_ref()
        .is_some_and(|current| current.section() == props.route);
    let active_route_class = if is_active { "btn-soft" } else { "" };

    html! {
      <li>
          <Link<MainRoute> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              <Icon icon_id={props.route.nav_icon()} class="w-5 h-5" />
              {route_name}
          </Link<MainRoute>>
      </li>
    }
}
