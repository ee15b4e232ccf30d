use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// One-based current page.
    pub page: u32,
    pub has_next: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<u32>,
}

/// Previous/next pager. The owning view keeps the page number.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let page = props.page.max(1);

    let on_previous = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(page.saturating_sub(1).max(1)))
    };
    let on_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_| on_change.emit(page.saturating_add(1)))
    };

    html! {
        <div class="join flex justify-center mt-8">
            <button
                class="join-item btn"
                disabled={props.disabled || page <= 1}
                onclick={on_previous}
            >{"«"}</button>
            <button class="join-item btn btn-disabled">{ format!("Page {page}") }</button>
            <button
                class="join-item btn"
                disabled={props.disabled || !props.has_next}
                onclick={on_next}
            >{"»"}</button>
        </div>
    }
}
