use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::{ConfigProvider, Theme};

#[component]
pub fn App() -> impl IntoView {
    // Resolved once; every page reads it through `use_config()`.
    provide_context(AppConfig::from_document());

    let theme = RwSignal::new(Theme::light());

    view! {
        <ConfigProvider theme=theme>
            <AppRoutes />
        </ConfigProvider>
    }
}
