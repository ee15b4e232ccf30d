use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub error: Option<&'static str>,
    #[prop_or_default]
    pub disabled: bool,
    pub oninput: Callback<String>,
}

/// Labelled text input with a field-scoped error message.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let callback = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                callback.emit(input.value());
            }
        })
    };

    html! {
        <div class="form-control">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
            </label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                class={classes!("input", "input-bordered", "w-full", props.error.map(|_| "input-error"))}
                value={props.value.clone()}
                disabled={props.disabled}
                {oninput}
            />
            if let Some(error) = props.error {
                <label class="label">
                    <span class="label-text-alt text-error">{ error }</span>
                </label>
            }
        </div>
    }
}
