use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Red alert box with a title line and a description
#[component]
pub fn ErrorAlert(
    #[prop(into)]
    title: String,
    #[prop(into)]
    description: String,
) -> impl IntoView {
    view! {
        <div class="alert alert--error">
            <MessageBar intent=MessageBarIntent::Error>
                <div class="alert__content">
                    {icon("alert-circle")}
                    <div>
                        <div class="alert__title">{title}</div>
                        <div class="alert__description">{description}</div>
                    </div>
                </div>
            </MessageBar>
        </div>
    }
}
