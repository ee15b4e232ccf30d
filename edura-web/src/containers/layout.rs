use crate::containers::header::Header;
use crate::routes::MainRoute;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            html_element
                .set_attribute("data-theme", "light")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
    <>
        <Header current_route={props.current_route.clone()} />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!(
                "flex-grow",
                "container",
                "mx-auto",
                "p-4",
                "transition-all",
                "duration-300"
            )}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <nav class="grid grid-flow-col gap-4">
                    <Link<MainRoute> to={MainRoute::About} classes="link link-hover">{"About"}</Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::Contact} classes="link link-hover">{"Contact"}</Link<MainRoute>>
                    <Link<MainRoute> to={MainRoute::Blog} classes="link link-hover">{"Blog"}</Link<MainRoute>>
                </nav>
                <p>{"© 2025 Edura · Learn anything, anywhere"}</p>
            </footer>
        </div>
    </>
    }
}
