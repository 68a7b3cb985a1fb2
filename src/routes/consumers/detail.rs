//! Consumer detail route. The profile and each related section hold
//! their own remote binding keyed by the user id, so navigating between
//! consumers refetches everything while switching tabs refetches
//! nothing, and one failing section never blanks the rest of the page.

use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::{
    app_lib::{
        format::display_date,
        remote::{RemoteState, loaded_len, use_remote},
    },
    components::{Alert, AlertKind, AppShell, Avatar, EmptyState, Spinner, TabBar, TabSpec},
    features::{
        catalogs::client as catalogs_client,
        posts::client as posts_client,
        requirements::client as requirements_client,
        users::{client, types::Consumer},
    },
    routes::sections::{
        CatalogCard, ConnectionList, Field, PostCard, RelatedSection, RequirementCard,
    },
};

#[derive(Params, PartialEq, Clone)]
struct ConsumerParams {
    id: Option<String>,
}

#[component]
pub fn ConsumerDetailPage() -> impl IntoView {
    let params = use_params::<ConsumerParams>();
    let id = move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    };

    let profile = use_remote(id, |id| async move { client::get_consumer(&id).await });
    let posts = use_remote(id, |id| async move { posts_client::list_by_user(&id).await });
    let requirements = use_remote(id, |id| async move {
        requirements_client::list_by_user(&id).await
    });
    let catalogs = use_remote(id, |id| async move { catalogs_client::list_by_user(&id).await });

    let post_count = Signal::derive(move || loaded_len(&posts.get()));
    let requirement_count = Signal::derive(move || loaded_len(&requirements.get()));
    let catalog_count = Signal::derive(move || loaded_len(&catalogs.get()));

    let (active, set_active) = signal("profile");

    view! {
        <AppShell>
            {move || match profile.get() {
                RemoteState::Idle | RemoteState::Loading => {
                    view! {
                        <div class="flex justify-center py-16">
                            <Spinner />
                        </div>
                    }
                        .into_any()
                }
                RemoteState::Failed(error) => {
                    view! { <Alert kind=AlertKind::Error message=error.to_string() /> }.into_any()
                }
                RemoteState::Loaded(None) => {
                    view! {
                        <EmptyState icon="person_off" message="Consumer not found.".to_string() />
                    }
                        .into_any()
                }
                RemoteState::Loaded(Some(consumer)) => {
                    let tabs = vec![
                        TabSpec::new("profile", "Profile"),
                        TabSpec::counted("posts", "Posts", post_count),
                        TabSpec::counted("requirements", "Requirements", requirement_count),
                        TabSpec::counted("catalogs", "Catalogs", catalog_count),
                    ];
                    let header = consumer.clone();

                    view! {
                        <div class="space-y-6">
                            <ConsumerHeader consumer=header />
                            <TabBar tabs=tabs active=active set_active=set_active />
                            {move || match active.get() {
                                "posts" => {
                                    view! {
                                        <RelatedSection
                                            items=posts
                                            icon="article"
                                            empty_message="No posts found."
                                            render=|post| view! { <PostCard post=post /> }
                                        />
                                    }
                                        .into_any()
                                }
                                "requirements" => {
                                    view! {
                                        <RelatedSection
                                            items=requirements
                                            icon="checklist"
                                            empty_message="No requirements found."
                                            render=|requirement| {
                                                view! { <RequirementCard requirement=requirement /> }
                                            }
                                        />
                                    }
                                        .into_any()
                                }
                                "catalogs" => {
                                    view! {
                                        <RelatedSection
                                            items=catalogs
                                            icon="inventory_2"
                                            empty_message="No catalogs found."
                                            render=|catalog| view! { <CatalogCard catalog=catalog /> }
                                        />
                                    }
                                        .into_any()
                                }
                                _ => {
                                    view! { <ConsumerProfile consumer=consumer.clone() /> }
                                        .into_any()
                                }
                            }}
                        </div>
                    }
                        .into_any()
                }
            }}
        </AppShell>
    }
}

#[component]
fn ConsumerHeader(consumer: Consumer) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-6 shadow-sm">
            <div class="flex flex-wrap items-center gap-4">
                <Avatar image=consumer.image.clone() name=consumer.name.clone() large=true />
                <div class="min-w-0 flex-1">
                    <h1 class="text-2xl font-semibold text-gray-900">{consumer.name.clone()}</h1>
                    <p class="text-sm text-gray-500">{consumer.email.clone()}</p>
                </div>
                <span class="rounded-full bg-indigo-100 px-3 py-1 text-xs font-medium uppercase tracking-wide text-indigo-700">
                    {consumer.user_type.clone()}
                </span>
            </div>
            <div class="mt-4 grid grid-cols-1 gap-4 sm:grid-cols-3">
                <Field label="Contact" value=consumer.contact.clone() />
                <Field label="City" value=consumer.city.clone() />
                <Field label="Joined" value=display_date(&consumer.created_at) />
            </div>
        </div>
    }
}

#[component]
fn ConsumerProfile(consumer: Consumer) -> impl IntoView {
    let bio = if consumer.bio.trim().is_empty() {
        "No bio provided.".to_string()
    } else {
        consumer.bio.clone()
    };

    view! {
        <div class="space-y-6">
            <div class="rounded-lg border border-gray-200 bg-white p-6 shadow-sm">
                <span class="block text-sm font-medium text-gray-500">"Bio"</span>
                <p class="mt-1 text-sm text-gray-900">{bio}</p>
                <div class="mt-4 grid grid-cols-1 gap-4 sm:grid-cols-2">
                    <Field label="Created" value=display_date(&consumer.created_at) />
                    <Field label="Updated" value=display_date(&consumer.updated_at) />
                </div>
            </div>
            <div>
                <h2 class="mb-2 text-sm font-medium text-gray-500">
                    {format!("Connections ({})", consumer.connections.len())}
                </h2>
                <ConnectionList connections=consumer.connections />
            </div>
        </div>
    }
}
