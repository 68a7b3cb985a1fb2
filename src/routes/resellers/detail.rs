//! Reseller detail route. Mirrors the consumer page but with a business
//! banner, an about tab, and a dedicated connections tab.

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
        users::{client, types::Reseller},
    },
    routes::sections::{
        CatalogCard, ConnectionList, Field, PostCard, RelatedSection, RequirementCard,
    },
};

#[derive(Params, PartialEq, Clone)]
struct ResellerParams {
    id: Option<String>,
}

#[component]
pub fn ResellerDetailPage() -> impl IntoView {
    let params = use_params::<ResellerParams>();
    let id = move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    };

    let profile = use_remote(id, |id| async move { client::get_reseller(&id).await });
    let posts = use_remote(id, |id| async move { posts_client::list_by_user(&id).await });
    let requirements = use_remote(id, |id| async move {
        requirements_client::list_by_user(&id).await
    });
    let catalogs = use_remote(id, |id| async move { catalogs_client::list_by_user(&id).await });

    let connection_count = Signal::derive(move || match profile.get() {
        RemoteState::Loaded(Some(reseller)) => Some(reseller.connections.len()),
        _ => None,
    });
    let post_count = Signal::derive(move || loaded_len(&posts.get()));
    let requirement_count = Signal::derive(move || loaded_len(&requirements.get()));
    let catalog_count = Signal::derive(move || loaded_len(&catalogs.get()));

    let (active, set_active) = signal("about");

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
                        <EmptyState
                            icon="storefront"
                            message="Reseller not found.".to_string()
                        />
                    }
                        .into_any()
                }
                RemoteState::Loaded(Some(reseller)) => {
                    let tabs = vec![
                        TabSpec::new("about", "About"),
                        TabSpec::counted("connections", "Connections", connection_count),
                        TabSpec::counted("posts", "Posts", post_count),
                        TabSpec::counted("requirements", "Requirements", requirement_count),
                        TabSpec::counted("catalogs", "Catalogs", catalog_count),
                    ];
                    let header = reseller.clone();

                    view! {
                        <div class="space-y-6">
                            <ResellerHeader reseller=header />
                            <TabBar tabs=tabs active=active set_active=set_active />
                            {move || match active.get() {
                                "connections" => {
                                    view! {
                                        <ConnectionList connections=reseller.connections.clone() />
                                    }
                                        .into_any()
                                }
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
                                    view! { <ResellerAbout reseller=reseller.clone() /> }
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
fn ResellerHeader(reseller: Reseller) -> impl IntoView {
    let banner = reseller.bg_image.clone();
    let has_banner = !banner.trim().is_empty();

    view! {
        <div class="overflow-hidden rounded-lg border border-gray-200 bg-white shadow-sm">
            {has_banner
                .then(move || {
                    view! { <img src=banner alt="" class="h-36 w-full object-cover" /> }
                })}
            <div class="p-6">
                <div class="flex flex-wrap items-center gap-4">
                    <Avatar
                        image=reseller.image.clone()
                        name=reseller.business_name.clone()
                        large=true
                    />
                    <div class="min-w-0 flex-1">
                        <h1 class="text-2xl font-semibold text-gray-900">
                            {reseller.business_name.clone()}
                        </h1>
                        <p class="text-sm text-gray-500">{reseller.email.clone()}</p>
                    </div>
                    <span class="rounded-full bg-indigo-100 px-3 py-1 text-xs font-medium uppercase tracking-wide text-indigo-700">
                        {reseller.user_type.clone()}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ResellerAbout(reseller: Reseller) -> impl IntoView {
    let about = if reseller.about_us.trim().is_empty() {
        "No description provided.".to_string()
    } else {
        reseller.about_us.clone()
    };

    view! {
        <div class="space-y-4 rounded-lg border border-gray-200 bg-white p-6 shadow-sm">
            <div>
                <span class="block text-sm font-medium text-gray-500">"About"</span>
                <p class="mt-1 text-sm text-gray-900">{about}</p>
            </div>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                <Field label="Owner" value=reseller.owner_name.clone() />
                <Field label="Contact" value=reseller.contact.clone() />
                <Field label="Address" value=reseller.address.clone() />
                <Field label="City" value=reseller.city.clone() />
                <Field label="Catalog items" value=reseller.catalogue_count.to_string() />
                <Field label="Created" value=display_date(&reseller.created_at) />
                <Field label="Updated" value=display_date(&reseller.updated_at) />
            </div>
        </div>
    }
}
