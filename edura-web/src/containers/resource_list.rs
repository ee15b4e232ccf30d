use crate::api::{EduraClient, Filters};
use crate::components::{Listing, Loading, Pagination, ResourceCard, SearchBar};
use crate::models::resource::{self, ResourceSlice};
use crate::models::session::SessionState;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};
use yewdux::prelude::{use_dispatch, use_selector, use_store_value};

/// Items requested per page.
pub const PAGE_SIZE: u32 = 12;

/// A full page means the backend may have more.
fn has_next_page(item_count: usize) -> bool {
    u32::try_from(item_count).is_ok_and(|count| count >= PAGE_SIZE)
}

/// Query for one page, narrowed by a search term when there is one.
fn list_filters(search: &str, page: u32) -> Filters {
    let filters = Filters::new().page(page).limit(PAGE_SIZE);
    if search.is_empty() {
        filters
    } else {
        filters.with("search", search)
    }
}

/// Paginated, searchable grid of one catalog entity.
///
/// The list is fetched again when the session ends, so an expired token
/// is not left failing the page.
#[function_component(ResourceList)]
pub fn resource_list<E: Listing>() -> Html {
    let page = use_state(|| 1_u32);
    let search = use_state(String::new);
    let dispatch = use_dispatch::<ResourceSlice<E>>();
    let slice = use_store_value::<ResourceSlice<E>>();
    let session = use_dispatch::<SessionState>();
    let signed_in = use_selector(SessionState::is_authenticated);

    {
        let filters = list_filters(&search, *page);
        use_effect_with((filters, *signed_in), move |(filters, _)| {
            let filters = filters.clone();
            spawn_local(async move {
                let client = EduraClient::shared();
                // Failures are recorded on the slice.
                let _ = resource::fetch_all(&dispatch, &session, &client, client.storage(), &filters)
                    .await;
            });
            || ()
        });
    }

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let on_search = {
        let page = page.clone();
        let search = search.clone();
        Callback::from(move |query: String| {
            search.set(query);
            page.set(1);
        })
    };

    let content = if slice.list.is_pending() && slice.items.is_empty() {
        html! { <Loading /> }
    } else if slice.items.is_empty() && slice.list.error().is_none() {
        html! { <p class="text-base-content/70">{ format!("No {} found.", E::PLURAL) }</p> }
    } else {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for slice.items.iter().map(|item| html! {
                    <ResourceCard<E> key={item.id().to_string()} item={item.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <div class="p-4 space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-bold">{ E::page_title() }</h1>
                <SearchBar
                    placeholder={format!("Search {}…", E::PLURAL)}
                    on_submit={on_search}
                />
            </div>
            if let Some(message) = slice.list.error() {
                <div class="alert alert-error">
                    <span>{ message.to_string() }</span>
                </div>
            }
            { content }
            <Pagination
                page={*page}
                has_next={has_next_page(slice.items.len())}
                disabled={slice.list.is_pending()}
                on_change={on_page_change}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_next_page() {
        assert!(!has_next_page(0));
        assert!(!has_next_page(PAGE_SIZE as usize - 1));
        assert!(has_next_page(PAGE_SIZE as usize));
    }

    #[test]
    fn test_list_filters() {
        assert_eq!(
            list_filters("", 2).pairs(),
            vec![("limit", "12"), ("page", "2")]
        );
        assert_eq!(
            list_filters("rust", 1).pairs(),
            vec![("limit", "12"), ("page", "1"), ("search", "rust")]
        );
    }
}
