use leptos::prelude::*;

/// Placeholder shown when a section loaded successfully but has nothing
/// to display.
#[component]
pub fn EmptyState(icon: &'static str, message: String) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-dashed border-gray-300 px-6 py-10 text-center">
            <span class="material-symbols-outlined text-3xl text-gray-400" aria-hidden="true">
                {icon}
            </span>
            <p class="mt-2 text-sm italic text-gray-500">{message}</p>
        </div>
    }
}
