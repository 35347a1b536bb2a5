use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_contract_review::{
    ContractReview, ReviewMode, SingleContractReview,
};
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::Spinner;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use super::model::{
    can_submit, error_banner, handle_file_change, has_preview, navigation_target,
    release_preview, run_submit, slot_label, success_banner, InputReset, PreviewFile,
};
use super::preview::PreviewPanel;
use super::state::{BrowserObjectUrls, UploadStore, MAX_SLOTS};
use crate::shared::components::ui::{Button, ErrorAlert};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;

/// Landing page: two versions of a contract, compared against each other
#[component]
pub fn CompareReviewPage() -> impl IntoView {
    view! {
        <PageFrame page_id="u601_contract_review--usecase" category=PAGE_CAT_USECASE>
            <ReviewForm
                mode=ReviewMode::Compare
                title=ContractReview::display_name()
                hint=ContractReview::description()
            />
        </PageFrame>
    }
}

/// One contract, analysed on its own
#[component]
pub fn SingleReviewPage() -> impl IntoView {
    view! {
        <PageFrame page_id="u601_contract_review_single--usecase" category=PAGE_CAT_USECASE>
            <ReviewForm
                mode=ReviewMode::Single
                title=SingleContractReview::display_name()
                hint=SingleContractReview::description()
            />
        </PageFrame>
    }
}

#[component]
fn ReviewForm(mode: ReviewMode, title: &'static str, hint: &'static str) -> impl IntoView {
    let config = use_config();
    let store = UploadStore::new(mode, config);
    let previews: [RwSignal<PreviewFile>; MAX_SLOTS] =
        [RwSignal::new(PreviewFile::default()), RwSignal::new(PreviewFile::default())];
    let input_refs: [NodeRef<html::Input>; MAX_SLOTS] = [NodeRef::new(), NodeRef::new()];
    let (loading, set_loading) = signal(false);

    let on_file_change = move |slot: usize, ev: web_sys::Event| {
        let chosen = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let mut file: Option<File> = None;
        let mut preview = previews[slot].get_untracked();
        let reset = handle_file_change(chosen, &mut file, &mut preview, &mut BrowserObjectUrls);
        store.file(slot).set(file);
        previews[slot].set(preview);

        if reset == InputReset::Clear {
            if let Some(input) = input_refs[slot].get_untracked() {
                input.set_value("");
            }
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(run_submit(store.upload_file(), move |value| set_loading.set(value)));
    };

    let submit_disabled =
        Signal::derive(move || !can_submit(loading.get(), store.filled_slots(), mode));

    // Navigate once the analysis job exists
    let navigate = use_navigate();
    let status_key = Memo::new(move |_| store.status().with(|s| s.key.clone()));
    Effect::new(move |previous: Option<Option<String>>| {
        let current = status_key.get();
        if let Some(path) = navigation_target(previous.flatten().as_deref(), current.as_deref()) {
            log::debug!("Navigating to {}", path);
            navigate(&path, Default::default());
        }
        current
    });

    on_cleanup(move || {
        for preview in previews {
            if let Some(mut state) = preview.try_get_untracked() {
                release_preview::<File, _>(&mut state, &mut BrowserObjectUrls);
            }
        }
    });

    let slot_inputs = store
        .slots()
        .map(|slot| {
            view! {
                <input
                    id=format!("file-{}", slot + 1)
                    type="file"
                    class="form__input"
                    aria-label=slot_label(slot)
                    node_ref=input_refs[slot]
                    on:change=move |ev| on_file_change(slot, ev)
                />
            }
        })
        .collect_view();

    let slot_errors = store
        .slots()
        .map(|slot| {
            move || {
                previews[slot].get().error.map(|error| {
                    view! {
                        <ErrorAlert
                            title=format!("File Type Error on {}.", slot_label(slot))
                            description=error
                        />
                    }
                })
            }
        })
        .collect_view();

    let slot_count = mode.slot_count();
    let show_preview = move || {
        let states: Vec<PreviewFile> = previews[..slot_count].iter().map(|p| p.get()).collect();
        has_preview(&states)
    };

    view! {
        <section class="review">
            <div class="review__intro">
                <h2 class="review__headline">"Review Legal Contracts Fast."</h2>
                <span class="review__tagline">
                    "Effortlessly Spot Differences between Hard and Soft Copies of Contracts with AI-Powered Analysis."
                </span>
                <h3 class="review__title">{title}</h3>
                <span class="review__hint">{hint}</span>
            </div>

            <form class="review__form" on:submit=on_submit>
                {slot_inputs}
                <Button button_type="submit" disabled=submit_disabled>
                    {move || if loading.get() {
                        view! { <Spinner /> }.into_any()
                    } else {
                        view! { <span>"Analyze "</span>{icon("arrow-right")} }.into_any()
                    }}
                </Button>
            </form>

            {slot_errors}

            {move || store.status().with(error_banner).map(|text| view! {
                <div class="status-banner status-banner--error">{text}</div>
            })}
            {move || store.status().with(success_banner).map(|text| view! {
                <div class="status-banner status-banner--success">{text}</div>
            })}
        </section>

        <Show when=show_preview>
            <PreviewPanel previews=previews[..slot_count].to_vec() />
        </Show>
    }
}
