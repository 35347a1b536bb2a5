use leptos::prelude::*;
use thaw::*;

use super::model::{slot_label, PreviewFile};

fn tab_value(slot: usize) -> String {
    format!("File{}", slot + 1)
}

/// Tabbed PDF previews, one tab per slot.
///
/// Hidden panes stay mounted so switching tabs does not reload the PDF.
#[component]
pub fn PreviewPanel(previews: Vec<RwSignal<PreviewFile>>) -> impl IntoView {
    let selected_tab = RwSignal::new(tab_value(0));

    let tabs = (0..previews.len())
        .map(|slot| {
            view! { <Tab value=tab_value(slot)>{slot_label(slot)}</Tab> }
        })
        .collect_view();

    let panes = previews
        .into_iter()
        .enumerate()
        .map(|(slot, preview)| {
            let value = tab_value(slot);
            view! {
                <div
                    class="pdf-preview__pane"
                    class:pdf-preview__pane--hidden=move || selected_tab.with(|v| *v != value)
                >
                    <iframe
                        src=move || preview.get().url
                        width="100%"
                        height="800px"
                        class="pdf-preview__frame"
                        title=format!("PDF Preview {}", slot + 1)
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="pdf-preview">
            <h2 class="pdf-preview__title">"Preview"</h2>
            <TabList selected_value=selected_tab>
                {tabs}
            </TabList>
            {panes}
        </section>
    }
}
