use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

/// Cart page component
#[function_component(CartPage)]
pub fn cart_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ "Your cart" }</h1>
            <div class="card bg-base-200">
                <div class="card-body items-center text-center">
                    <Icon icon_id={IconId::HeroiconsOutlineShoppingCart} class="w-10 h-10" />
                    <p>{ "Your cart is empty." }</p>
                    <div class="card-actions">
                        <Link<MainRoute> to={MainRoute::Shop} classes="btn btn-primary">{ "Visit the shop" }</Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Checkout} classes="btn btn-ghost">{ "Checkout" }</Link<MainRoute>>
                    </div>
                </div>
            </div>
        </div>
    }
}
