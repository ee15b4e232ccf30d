use crate::components::format_price;
use crate::models::session::SessionState;
use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

/// Checkout page component
#[function_component(CheckoutPage)]
pub fn checkout_page() -> Html {
    let email = use_selector(|state: &SessionState| {
        state.user().map(|user| user.email.clone()).unwrap_or_default()
    });

    html! {
        <div class="p-4 space-y-6 max-w-xl">
            <h1 class="text-2xl font-bold">{ "Checkout" }</h1>
            <div class="card bg-base-200">
                <div class="card-body">
                    <p>{ format!("Receipts will be sent to {email}.") }</p>
                    <div class="flex justify-between font-semibold">
                        <span>{ "Total" }</span>
                        <span>{ format_price(0.0, None) }</span>
                    </div>
                    <div class="card-actions justify-end">
                        <Link<MainRoute> to={MainRoute::Cart} classes="btn btn-ghost">{ "Back to cart" }</Link<MainRoute>>
                        <button class="btn btn-primary" disabled=true>{ "Place order" }</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
