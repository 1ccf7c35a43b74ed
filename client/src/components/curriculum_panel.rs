//! Expandable curriculum panel listing a course's modules.

use leptos::prelude::*;

use crate::net::types::ModuleSummary;

/// Expansion panel with one clickable item per module. Selecting an item
/// hands the module id back to the page, which fetches its content.
#[component]
pub fn CurriculumPanel(modules: Vec<ModuleSummary>, on_select: Callback<String>) -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <section class="curriculum">
            <button
                class="curriculum__header"
                name="matExpansionPanel"
                on:click=move |_| expanded.update(|e| *e = !*e)
            >
                "Course curriculum"
                <span class="curriculum__chevron">{move || if expanded.get() { "▾" } else { "▸" }}</span>
            </button>
            <Show when=move || expanded.get()>
                <ul class="curriculum__list">
                    {modules
                        .clone()
                        .into_iter()
                        .map(|module| {
                            let id = module.id.clone();
                            view! {
                                <li>
                                    <button
                                        class="moduleItem"
                                        on:click=move |_| on_select.run(id.clone())
                                    >
                                        <span class="moduleItem__kind">{module.kind.clone()}</span>
                                        <span class="moduleItem__title">{module.title.clone()}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </section>
    }
}
