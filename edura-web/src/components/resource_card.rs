use crate::components::listing::Listing;
use crate::components::price::Price;
use crate::routes::MainRoute;
use yew::{AttrValue, Html, Properties, function_component, html};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct ResourceCardProps<E: Listing> {
    pub item: E,
}

/// Card for one catalog entity in a collection grid.
#[function_component(ResourceCard)]
pub fn resource_card<E: Listing>(props: &ResourceCardProps<E>) -> Html {
    let item = &props.item;

    html! {
        <div class="card bg-base-200 shadow-xl">
            if let Some(image) = item.image() {
                <figure><img src={image.to_string()} alt={item.heading().to_string()} /></figure>
            }
            <div class="card-body">
                <h2 class="card-title">{ item.heading() }</h2>
                if let Some(summary) = item.summary() {
                    <p class="line-clamp-3">{ summary }</p>
                }
                <ul class="text-sm text-base-content/70">
                    { for item.facts().into_iter().map(|(label, value)| html! {
                        <li><span class="font-medium">{ label }{": "}</span>{ value }</li>
                    }) }
                </ul>
                <div class="card-actions justify-between items-center">
                    if let Some((amount, currency)) = item.price() {
                        <Price {amount} currency={currency.map(|code| AttrValue::from(code.to_string()))} />
                    }
                    if let Some(route) = item.detail_route() {
                        <Link<MainRoute> to={route} classes="btn btn-primary btn-sm">
                            {"View details"}
                        </Link<MainRoute>>
                    }
                </div>
            </div>
        </div>
    }
}
