use leptos::prelude::*;

/// Profile picture with an initial-letter fallback for accounts that
/// never uploaded an image.
#[component]
pub fn Avatar(
    image: String,
    name: String,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let size = if large { "h-16 w-16 text-2xl" } else { "h-10 w-10 text-base" };
    let initial = name
        .trim()
        .chars()
        .next()
        .map(|letter| letter.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    if image.trim().is_empty() {
        view! {
            <div class=format!(
                "{size} flex flex-shrink-0 items-center justify-center rounded-full bg-indigo-100 font-semibold text-indigo-700",
            )>{initial}</div>
        }
        .into_any()
    } else {
        view! {
            <img
                src=image
                alt=name
                class=format!("{size} flex-shrink-0 rounded-full object-cover")
            />
        }
        .into_any()
    }
}
