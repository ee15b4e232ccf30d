use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    #[prop_or(AttrValue::Static("Search…"))]
    pub placeholder: AttrValue,
    /// Emits the trimmed query on submit.
    pub on_submit: Callback<String>,
}

/// Text search that only reports on submit.
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let value = use_state(String::new);

    let oninput = {
        let value = value.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            value.set(input.value());
        })
    };

    let onsubmit = {
        let value = value.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(value.trim().to_string());
        })
    };

    html! {
        <form class="join w-full max-w-md" {onsubmit}>
            <input
                type="search"
                class="input input-bordered join-item w-full"
                placeholder={props.placeholder.clone()}
                value={(*value).clone()}
                {oninput}
            />
            <button class="btn btn-primary join-item" type="submit">
                {"Search"}
            </button>
        </form>
    }
}
