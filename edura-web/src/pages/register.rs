use crate::api::EduraClient;
use crate::components::FormField;
use crate::models::session::{self, SessionAction, SessionError, SessionState};
use crate::routes::MainRoute;
use crate::validation::{Field, FieldErrors, RegisterForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{use_dispatch, use_store_value};

/// Setter for one text field of the form.
fn field_setter(
    form: &UseStateHandle<RegisterForm>,
    apply: fn(&mut RegisterForm, String),
) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    })
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let form = use_state(RegisterForm::default);
    let field_errors = use_state(FieldErrors::default);
    let session = use_store_value::<SessionState>();
    let dispatch = use_dispatch::<SessionState>();

    // Auth errors do not outlive the page.
    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            move || dispatch.apply(SessionAction::ClearError)
        });
    }

    if session.is_authenticated() {
        return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
    }

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
                match session::register(&dispatch, &client, client.storage(), &values).await {
                    Err(SessionError::Invalid(errors)) => field_errors.set(errors),
                    Ok(_) | Err(SessionError::Rejected(_)) => field_errors.set(FieldErrors::default()),
                }
            });
        })
    };

    let on_terms = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            form.set(RegisterForm {
                agree_to_terms: input.checked(),
                ..(*form).clone()
            });
        })
    };

    let is_busy = session.is_loading();

    html! {
        <div class="flex items-center justify-center py-12">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit} novalidate=true>
                    <h2 class="card-title text-2xl">{"Create your account"}</h2>
                    if let Some(message) = session.error() {
                        <div class="alert alert-error">
                            <span>{ message.to_string() }</span>
                        </div>
                    }
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-2">
                        <FormField
                            id="first-name"
                            label="First name"
                            value={form.first_name.clone()}
                            error={field_errors.message(Field::FirstName)}
                            disabled={is_busy}
                            oninput={field_setter(&form, |form, value| form.first_name = value)}
                        />
                        <FormField
                            id="last-name"
                            label="Last name"
                            value={form.last_name.clone()}
                            error={field_errors.message(Field::LastName)}
                            disabled={is_busy}
                            oninput={field_setter(&form, |form, value| form.last_name = value)}
                        />
                    </div>
                    <FormField
                        id="email"
                        label="Email"
                        input_type="email"
                        value={form.email.clone()}
                        error={field_errors.message(Field::Email)}
                        disabled={is_busy}
                        oninput={field_setter(&form, |form, value| form.email = value)}
                    />
                    <FormField
                        id="password"
                        label="Password"
                        input_type="password"
                        value={form.password.clone()}
                        error={field_errors.message(Field::Password)}
                        disabled={is_busy}
                        oninput={field_setter(&form, |form, value| form.password = value)}
                    />
                    <FormField
                        id="confirm-password"
                        label="Confirm password"
                        input_type="password"
                        value={form.confirm_password.clone()}
                        error={field_errors.message(Field::ConfirmPassword)}
                        disabled={is_busy}
                        oninput={field_setter(&form, |form, value| form.confirm_password = value)}
                    />
                    <div class="form-control">
                        <label class="label cursor-pointer justify-start gap-2">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-sm"
                                checked={form.agree_to_terms}
                                onchange={on_terms}
                            />
                            <span class="label-text">{"I agree to the terms and conditions"}</span>
                        </label>
                        if let Some(error) = field_errors.message(Field::AgreeToTerms) {
                            <span class="label-text-alt text-error">{ error }</span>
                        }
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Creating account..." } else { "Sign up" }}
                        </button>
                    </div>
                    <p class="text-sm text-center">
                        {"Already registered? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">{"Log in"}</Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
