use crate::layout::Shell;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::usecases::u601_contract_review::{AnalysisPage, CompareReviewPage, SingleReviewPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <h2>"Page not found"</h2>
            <A href="/">"Back to the upload page"</A>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CompareReviewPage />
                    <Route path=path!("/single") view=SingleReviewPage />
                    <Route path=path!("/analysis/:key") view=AnalysisPage />
                </Routes>
            </Shell>
        </Router>
    }
}
