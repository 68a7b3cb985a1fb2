use leptos::prelude::*;

/// Small count pill, hidden until the count is known so a slow section
/// never shows a misleading zero.
#[component]
pub fn CountBadge(count: Signal<Option<usize>>) -> impl IntoView {
    view! {
        {move || {
            count
                .get()
                .map(|value| {
                    view! {
                        <span class="inline-flex min-w-5 items-center justify-center rounded-full bg-indigo-100 px-1.5 py-0.5 text-xs font-medium text-indigo-700">
                            {value}
                        </span>
                    }
                })
        }}
    }
}
