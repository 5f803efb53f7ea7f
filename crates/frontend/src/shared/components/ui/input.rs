use leptos::prelude::*;

/// Labelled text field bound to a signal.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Bound value
    value: RwSignal<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="field">
            {move || label.get().map(|text| view! { <label class="field__label" for=input_id>{text}</label> })}
            <input
                class="field__input"
                id=input_id
                type=input_t
                placeholder=move || placeholder.get().unwrap_or_default()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
