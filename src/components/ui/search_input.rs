use leptos::prelude::*;

/// Search box bound to a text signal. Filtering happens client-side in
/// the owning view, so every keystroke narrows the list immediately.
#[component]
pub fn SearchInput(
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <span
                class="material-symbols-outlined pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 text-xl text-gray-400"
                aria-hidden="true"
            >
                "search"
            </span>
            <input
                type="search"
                placeholder=placeholder
                class="w-full rounded-lg border border-gray-300 bg-white py-2 pl-11 pr-4 text-sm text-gray-900 focus:border-indigo-500 focus:outline-none focus:ring-2 focus:ring-indigo-200"
                prop:value=move || value.get()
                on:input=move |event| set_value.set(event_target_value(&event))
            />
        </div>
    }
}
