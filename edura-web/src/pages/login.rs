use crate::api::EduraClient;
use crate::components::FormField;
use crate::models::session::{self, SessionAction, SessionError, SessionState};
use crate::routes::{LoginRedirect, MainRoute, post_login_target};
use crate::validation::{Field, FieldErrors, LoginForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{use_dispatch, use_store_value};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_state(LoginForm::default);
    let field_errors = use_state(FieldErrors::default);
    let session = use_store_value::<SessionState>();
    let dispatch = use_dispatch::<SessionState>();
    let from = use_location()
        .and_then(|location| location.query::<LoginRedirect>().ok())
        .and_then(|redirect| redirect.from);

    // Auth errors do not outlive the page.
    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            move || dispatch.apply(SessionAction::ClearError)
        });
    }

    if session.is_authenticated() {
        return html! { <Redirect<MainRoute> to={post_login_target(from.as_deref())} /> };
    }

    // A successful login re-renders this page into the redirect above.
    let onsubmit = {
        let form = form.clone();
        let field_errors = field_errors.clone();
        let is_busy = session.is_loading();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if is_busy {
                return;
            }
            let values = (*form).clone();
            let field_errors = field_errors.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = EduraClient::shared();
                match session::login(&dispatch, &client, client.storage(), &values).await {
                    Err(SessionError::Invalid(errors)) => field_errors.set(errors),
                    Ok(_) | Err(SessionError::Rejected(_)) => field_errors.set(FieldErrors::default()),
                }
            });
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |email: String| {
            form.set(LoginForm {
                email,
                ..(*form).clone()
            });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |password: String| {
            form.set(LoginForm {
                password,
                ..(*form).clone()
            });
        })
    };

    let on_remember = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            form.set(LoginForm {
                remember_me: input.checked(),
                ..(*form).clone()
            });
        })
    };

    let is_busy = session.is_loading();

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{"Log in"}</h2>
                    if let Some(message) = session.error() {
                        <div class="alert alert-error">
                            <span>{ message.to_string() }</span>
                        </div>
                    }
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        value={form.email.clone()}
                        error={field_errors.message(Field::Email)}
                        disabled={is_busy}
                        oninput={on_email}
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        value={form.password.clone()}
                        error={field_errors.message(Field::Password)}
                        disabled={is_busy}
                        oninput={on_password}
                    />
                    <label class="label cursor-pointer justify-start gap-2">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-sm"
                            checked={form.remember_me}
                            onchange={on_remember}
                        />
                        <span class="label-text">{"Remember me"}</span>
                    </label>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Signing in..." } else { "Log in" }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {"No account yet? "}
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">{"Sign up"}</Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
