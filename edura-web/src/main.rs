mod api;
mod app;
mod components;
mod config;
mod containers;
mod models;
mod pages;
mod routes;
mod routes_test;
mod storage;
#[cfg(test)]
mod test_support;
mod validation;

use app::App;
use config::FrontendConfig;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

const CRASH_MARKUP: &str = r#"<div class="flex items-center justify-center min-h-screen">
<p class="text-xl">Something went wrong.</p>
</div>"#;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

/// Log any panic and replace the page with a static message.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        log::error!("panic: {info}");
        web_sys::console::error_1(&format!("Panic: {info}").into());
        if let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        {
            body.set_inner_html(CRASH_MARKUP);
        }
    }));
}

fn main() {
    let config = FrontendConfig::new();
    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::new(config.log_level));

    install_panic_hook();
    log::info!("starting Edura, API at {}", config.api_base_url);

    Renderer::<Root>::new().render();
}
