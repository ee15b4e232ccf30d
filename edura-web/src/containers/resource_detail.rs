use crate::api::EduraClient;
use crate::components::{Listing, Loading, Price};
use crate::models::resource::{self, ResourceSlice};
use crate::models::session::SessionState;
use crate::routes::MainRoute;
use shared::models::EntityId;
use wasm_bindgen_futures::spawn_local;
use yew::{AttrValue, Html, Properties, function_component, html, use_effect_with};
use yew_router::prelude::Link;
use yewdux::prelude::{use_dispatch, use_selector, use_store_value};

#[derive(Properties, PartialEq)]
pub struct ResourceDetailProps {
    pub id: EntityId,
}

/// Detail page of one catalog entity.
///
/// The selection is cleared when the page unmounts or the id changes, and
/// fetched again when the session ends.
#[function_component(ResourceDetail)]
pub fn resource_detail<E: Listing>(props: &ResourceDetailProps) -> Html {
    let dispatch = use_dispatch::<ResourceSlice<E>>();
    let slice = use_store_value::<ResourceSlice<E>>();
    let session = use_dispatch::<SessionState>();
    let signed_in = use_selector(SessionState::is_authenticated);

    use_effect_with((props.id.clone(), *signed_in), move |(id, _)| {
        let id = id.clone();
        let fetch_dispatch = dispatch.clone();
        spawn_local(async move {
            let client = EduraClient::shared();
            let _ = resource::fetch_by_id(&fetch_dispatch, &session, &client, client.storage(), &id)
                .await;
        });
        move || resource::clear_selected(&dispatch)
    });

    let back = html! {
        <Link<MainRoute> to={E::list_route()} classes="btn btn-ghost btn-sm">
            { format!("← Back to {}", E::page_title()) }
        </Link<MainRoute>>
    };

    let body = match (&slice.selected, slice.detail.error()) {
        (_, Some(message)) => html! {
            <div class="alert alert-error">
                <span>{ message.to_string() }</span>
            </div>
        },
        (Some(item), None) if !slice.detail.is_pending() => html! {
            <article class="card bg-base-200 shadow-xl">
                if let Some(image) = item.image() {
                    <figure><img src={image.to_string()} alt={item.heading().to_string()} /></figure>
                }
                <div class="card-body space-y-4">
                    <h1 class="card-title text-3xl">{ item.heading() }</h1>
                    <dl class="grid grid-cols-[auto,1fr] gap-x-4 gap-y-1 text-sm">
                        { for item.facts().into_iter().map(|(label, value)| html! {
                            <>
                                <dt class="font-medium">{ label }</dt>
                                <dd>{ value }</dd>
                            </>
                        }) }
                    </dl>
                    if let Some((amount, currency)) = item.price() {
                        <Price {amount} currency={currency.map(|code| AttrValue::from(code.to_string()))} />
                    }
                    if let Some(body) = item.body() {
                        <p class="whitespace-pre-line">{ body }</p>
                    }
                    <div class="card-actions justify-end">
                        { item.actions() }
                    </div>
                </div>
            </article>
        },
        _ => html! { <Loading /> },
    };

    html! {
        <div class="p-4 space-y-6">
            { back }
            { body }
        </div>
    }
}
