use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                {icon("file-text")}
                <span class="header__title">"Contract Review"</span>
            </div>
            <nav class="header__actions">
                <A href="/" attr:class="button button--ghost">"Compare"</A>
                <A href="/single" attr:class="button button--ghost">"Single file"</A>
            </nav>
        </header>
    }
}
