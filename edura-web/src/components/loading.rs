use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("Loading"))]
    pub label: AttrValue,
}

/// Neutral placeholder shown while data or the session is being resolved.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-16 animate-fadeIn" role="status">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <span class="mt-3 text-base-content/70">{ props.label.clone() }</span>
        </div>
    }
}
