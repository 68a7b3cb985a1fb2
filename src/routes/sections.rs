//! Shared pieces of the user detail pages: the related-content section
//! wrapper and the cards it renders. Each section owns one remote
//! binding, so a failing section shows its own error while the others
//! keep their data.

use leptos::prelude::*;

use crate::{
    app_lib::{
        format::display_date,
        remote::{Remote, RemoteState},
    },
    components::{Alert, AlertKind, EmptyState, Spinner},
    features::{
        catalogs::types::Catalog, posts::types::Post, requirements::types::Requirement,
        users::types::Connection,
    },
};

/// Renders one related-content section from its remote binding.
#[component]
pub fn RelatedSection<T, F, IV>(
    items: Remote<Vec<T>>,
    icon: &'static str,
    empty_message: &'static str,
    render: F,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> IV + Copy + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    view! {
        {move || match items.get() {
            RemoteState::Idle | RemoteState::Loading => {
                view! {
                    <div class="py-10 text-center">
                        <Spinner />
                    </div>
                }
                    .into_any()
            }
            RemoteState::Failed(error) => {
                view! { <Alert kind=AlertKind::Error message=error.to_string() /> }.into_any()
            }
            RemoteState::Loaded(items) if items.is_empty() => {
                view! { <EmptyState icon=icon message=empty_message.to_string() /> }.into_any()
            }
            RemoteState::Loaded(items) => {
                view! {
                    <div class="space-y-4">
                        {items.into_iter().map(render).collect_view()}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// Labelled value used in detail page grids. Blank values render as "-".
#[component]
pub fn Field(label: &'static str, value: String) -> impl IntoView {
    let value = if value.trim().is_empty() {
        "-".to_string()
    } else {
        value
    };

    view! {
        <div>
            <span class="block text-sm font-medium text-gray-500">{label}</span>
            <div class="mt-1 text-sm text-gray-900">{value}</div>
        </div>
    }
}

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    view! {
        <article class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm">
            <div class="flex items-start justify-between gap-4">
                <p class="text-base font-medium text-gray-900">{post.description}</p>
                <CategoryBadge category=post.category />
            </div>
            <ImageStrip images=post.images />
            <p class="mt-3 text-xs text-gray-400">{display_date(&post.created_at)}</p>
        </article>
    }
}

#[component]
pub fn RequirementCard(requirement: Requirement) -> impl IntoView {
    view! {
        <article class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm">
            <div class="flex items-start justify-between gap-4">
                <h4 class="text-base font-semibold text-gray-900">{requirement.product_name}</h4>
                <CategoryBadge category=requirement.category />
            </div>
            <div class="mt-2 grid grid-cols-1 gap-1 text-sm text-gray-700 sm:grid-cols-2">
                <p>
                    <span class="font-medium">"Quantity: "</span>
                    {requirement.quantity}
                </p>
                <p>
                    <span class="font-medium">"Total Price: "</span>
                    {format!("${}", requirement.total_price)}
                </p>
            </div>
            <p class="mt-2 text-sm text-gray-600">{requirement.details}</p>
            <ImageStrip images=requirement.images />
            <p class="mt-3 text-xs text-gray-400">{display_date(&requirement.created_at)}</p>
        </article>
    }
}

#[component]
pub fn CatalogCard(catalog: Catalog) -> impl IntoView {
    view! {
        <article class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm">
            <div class="flex items-start justify-between gap-4">
                <h4 class="text-base font-semibold text-gray-900">{catalog.product_name}</h4>
                <CategoryBadge category=catalog.category />
            </div>
            <p class="mt-2 text-sm text-gray-700">
                <span class="font-medium">"Price: "</span>
                {format!("${}", catalog.price)}
            </p>
            <p class="mt-2 text-sm text-gray-600">{catalog.description}</p>
            <ImageStrip images=catalog.images />
            <p class="mt-3 text-xs text-gray-400">{display_date(&catalog.created_at)}</p>
        </article>
    }
}

/// Connection edges for a user, rendered as id and relation rows.
#[component]
pub fn ConnectionList(connections: Vec<Connection>) -> impl IntoView {
    if connections.is_empty() {
        view! { <EmptyState icon="group" message="No connections found.".to_string() /> }.into_any()
    } else {
        view! {
            <ul class="divide-y divide-gray-200 overflow-hidden rounded-lg border border-gray-200 bg-white shadow-sm">
                {connections
                    .into_iter()
                    .map(|connection| {
                        view! {
                            <li class="flex items-center justify-between px-4 py-3">
                                <span class="font-mono text-sm text-gray-700">
                                    {connection.user_id}
                                </span>
                                <span class="rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-medium text-gray-600">
                                    {connection.relation_type}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
            .into_any()
    }
}

#[component]
fn CategoryBadge(category: String) -> impl IntoView {
    let present = !category.trim().is_empty();

    present.then(move || {
        view! {
            <span class="whitespace-nowrap rounded-full bg-indigo-100 px-2.5 py-0.5 text-xs font-medium text-indigo-700">
                {category}
            </span>
        }
    })
}

#[component]
fn ImageStrip(images: Vec<String>) -> impl IntoView {
    let present = !images.is_empty();

    present.then(move || {
        view! {
            <div class="mt-3 flex gap-2 overflow-x-auto">
                {images
                    .into_iter()
                    .map(|src| {
                        view! {
                            <img
                                src=src
                                alt=""
                                class="h-20 w-20 flex-shrink-0 rounded-md object-cover"
                            />
                        }
                    })
                    .collect_view()}
            </div>
        }
    })
}
