//! Searchable user directory shared by the consumer and reseller list
//! pages. The directory renders whatever the backend returned and
//! filters it client-side, so search never issues requests and a
//! re-render never refetches the list.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::{
    app_lib::remote::{Remote, RemoteState},
    components::ui::{Alert, AlertKind, Avatar, EmptyState, SearchInput, Spinner},
    features::users::{
        search::{self, Searchable},
        types::{ConsumerSummary, ResellerSummary},
    },
    routes::paths,
};

/// A record the directory knows how to render as a row.
pub trait DirectoryRow: Searchable + Clone + Send + Sync + 'static {
    /// Stable identity for keyed rendering.
    fn key(&self) -> String;
    /// Primary line of the row.
    fn title(&self) -> String;
    /// Secondary line of the row.
    fn subtitle(&self) -> String;
    /// Profile image URL, possibly empty.
    fn image(&self) -> String;
    /// Detail page for the record.
    fn href(&self) -> String;
}

impl DirectoryRow for ConsumerSummary {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn subtitle(&self) -> String {
        self.email.clone()
    }

    fn image(&self) -> String {
        self.image.clone()
    }

    fn href(&self) -> String {
        paths::consumer_detail(&self.id)
    }
}

impl DirectoryRow for ResellerSummary {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn title(&self) -> String {
        self.business_name.clone()
    }

    fn subtitle(&self) -> String {
        self.email.clone()
    }

    fn image(&self) -> String {
        self.image.clone()
    }

    fn href(&self) -> String {
        paths::reseller_detail(&self.id)
    }
}

/// Renders a heading, search box, and the fetched records as linked rows.
#[component]
pub fn UserDirectory<T: DirectoryRow>(
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    empty_label: &'static str,
    search_placeholder: &'static str,
    records: Remote<Vec<T>>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="flex items-center gap-2 text-2xl font-semibold text-gray-900">
                        <span
                            class="material-symbols-outlined text-3xl text-indigo-600"
                            aria-hidden="true"
                        >
                            {icon}
                        </span>
                        {title}
                    </h1>
                    <p class="text-sm text-gray-500">{description}</p>
                </div>
                <button
                    type="button"
                    class="inline-flex items-center gap-1 rounded-lg border border-gray-300 bg-white px-3 py-2 text-sm font-medium text-gray-700 transition-colors hover:bg-gray-50"
                    on:click=move |_| records.refetch()
                >
                    <span class="material-symbols-outlined text-lg" aria-hidden="true">
                        "refresh"
                    </span>
                    "Reload"
                </button>
            </div>

            <SearchInput placeholder=search_placeholder value=query set_value=set_query />

            <div class="overflow-hidden bg-white shadow-sm border border-gray-200 rounded-lg">
                {move || match records.get() {
                    RemoteState::Idle | RemoteState::Loading => {
                        view! {
                            <div class="px-6 py-12 text-center">
                                <Spinner />
                            </div>
                        }
                            .into_any()
                    }
                    RemoteState::Failed(error) => {
                        view! {
                            <div class="p-4">
                                <Alert kind=AlertKind::Error message=error.to_string() />
                            </div>
                        }
                            .into_any()
                    }
                    RemoteState::Loaded(list) => {
                        let visible = search::filter(&list, &query.get());
                        if visible.is_empty() {
                            view! {
                                <div class="p-6">
                                    <EmptyState
                                        icon=icon
                                        message=format!("No {empty_label} found.")
                                    />
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <ul class="divide-y divide-gray-200">
                                    <For
                                        each=move || visible.clone()
                                        key=|record| record.key()
                                        children=move |record: T| {
                                            let title = record.title();
                                            view! {
                                                <li>
                                                    <A
                                                        href=record.href()
                                                        {..}
                                                        attr:class="flex items-center gap-4 px-6 py-4 transition-colors hover:bg-gray-50"
                                                    >
                                                        <Avatar image=record.image() name=title.clone() />
                                                        <div class="min-w-0">
                                                            <p class="truncate text-sm font-medium text-gray-900">
                                                                {title}
                                                            </p>
                                                            <p class="truncate text-sm text-gray-500">
                                                                {record.subtitle()}
                                                            </p>
                                                        </div>
                                                        <span
                                                            class="material-symbols-outlined ml-auto text-gray-400"
                                                            aria-hidden="true"
                                                        >
                                                            "chevron_right"
                                                        </span>
                                                    </A>
                                                </li>
                                            }
                                        }
                                    />
                                </ul>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::DirectoryRow;
    use crate::features::users::types::{ConsumerSummary, ResellerSummary};

    #[test]
    fn consumer_rows_link_to_consumer_detail() {
        let row = ConsumerSummary {
            id: "663a01".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            image: String::new(),
        };

        assert_eq!(row.href(), "/admin/consumer/663a01");
        assert_eq!(row.title(), "Alice");
        assert_eq!(row.subtitle(), "alice@example.com");
    }

    #[test]
    fn reseller_rows_link_to_reseller_detail() {
        let row = ResellerSummary {
            id: "r9".to_string(),
            business_name: "Crafts Hub".to_string(),
            email: "hub@example.com".to_string(),
            image: String::new(),
        };

        assert_eq!(row.href(), "/admin/reseller/r9");
        assert_eq!(row.title(), "Crafts Hub");
    }
}
