use crate::config::FrontendConfig;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

/// Contact page component
#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let config = FrontendConfig::new();
    let mailto = format!("mailto:{}", config.support_email);

    html! {
        <div class="p-4 space-y-6 max-w-3xl">
            <h1 class="text-2xl font-bold">{ "Contact us" }</h1>
            <p>{ "Questions about a course, an order or your account? Write to us." }</p>
            <a class="btn btn-primary gap-2" href={mailto}>
                <Icon icon_id={IconId::HeroiconsOutlineEnvelope} class="w-5 h-5" />
                { config.support_email.clone() }
            </a>
        </div>
    }
}
