use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Landing view for a submitted job; the results themselves come from the analysis service
#[component]
pub fn AnalysisPage() -> impl IntoView {
    let params = use_params_map();
    // Only plain path segments are ever navigated to, so the param needs no decoding
    let key = move || params.read().get("key").unwrap_or_default();

    view! {
        <PageFrame page_id="u601_contract_review--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h2 class="review__title">"Analysis submitted"</h2>
            </div>
            <div class="page__content">
                <p>"Your documents were uploaded. Analysis job: " <code>{key}</code></p>
                <A href="/">
                    {icon("arrow-left")}
                    " Compare other documents"
                </A>
            </div>
        </PageFrame>
    }
}
