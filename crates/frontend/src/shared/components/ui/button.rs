use leptos::prelude::*;

/// Primary button with a `type` attribute and reactive disabled state
#[component]
pub fn Button(
    /// Button type attribute: "button" (default) or "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    children: Children,
) -> impl IntoView {
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class="button button--primary"
            disabled=move || disabled.get().unwrap_or(false)
        >
            {children()}
        </button>
    }
}
