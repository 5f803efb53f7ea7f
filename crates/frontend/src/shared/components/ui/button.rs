use leptos::prelude::*;

/// Button with storefront variants: "primary" (gradient, default),
/// "glass" (translucent) and "chip" (rounded filter pill).
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "glass" or "chip"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Stretch to the container width
    #[prop(optional)]
    block: bool,
    /// Highlighted state, used by chips (reactive)
    #[prop(optional, into)]
    active: MaybeProp<bool>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "glass" => "btn--glass",
        "chip" => "btn--chip",
        _ => "btn--primary",
    };
    let active_class = move || if active.get().unwrap_or(false) { "is-active" } else { "" };
    let block_class = if block { "btn--block" } else { "" };
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("btn {} {} {} {}", variant_class(), active_class(), block_class, additional_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
