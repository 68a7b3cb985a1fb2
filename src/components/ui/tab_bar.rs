//! Tab strip for the user detail pages. Tabs only switch which section
//! is visible; they never reload section data.

use crate::components::ui::CountBadge;
use leptos::prelude::*;

/// One tab in a [`TabBar`].
#[derive(Clone)]
pub struct TabSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub count: Option<Signal<Option<usize>>>,
}

impl TabSpec {
    pub fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            count: None,
        }
    }

    pub fn counted(id: &'static str, label: &'static str, count: Signal<Option<usize>>) -> Self {
        Self {
            id,
            label,
            count: Some(count),
        }
    }
}

/// Renders the tab strip and reports clicks through `set_active`.
#[component]
pub fn TabBar(
    tabs: Vec<TabSpec>,
    active: ReadSignal<&'static str>,
    set_active: WriteSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="border-b border-gray-200">
            <nav class="-mb-px flex gap-6 overflow-x-auto" role="tablist">
                {tabs
                    .into_iter()
                    .map(|tab| {
                        let id = tab.id;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected=move || (active.get() == id).to_string()
                                class="flex items-center gap-2 whitespace-nowrap border-b-2 px-1 py-3 text-sm font-medium transition-colors hover:text-indigo-600"
                                class:border-indigo-600=move || active.get() == id
                                class:text-indigo-600=move || active.get() == id
                                class:border-transparent=move || active.get() != id
                                class:text-gray-500=move || active.get() != id
                                on:click=move |_| set_active.set(id)
                            >
                                {tab.label}
                                {tab.count.map(|count| view! { <CountBadge count=count /> })}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
