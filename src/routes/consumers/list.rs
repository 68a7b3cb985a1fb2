//! Consumer directory route. Fetches the full list once and filters it
//! client-side as the admin types.

use leptos::prelude::*;

use crate::{
    app_lib::remote::use_remote,
    components::{AppShell, UserDirectory},
    features::users::client,
};

#[component]
pub fn ConsumersListPage() -> impl IntoView {
    let consumers = use_remote(|| (), |()| async { client::list_consumers().await });

    view! {
        <AppShell>
            <UserDirectory
                title="Consumers"
                description="All consumer accounts registered on Shopme."
                icon="group"
                empty_label="consumers"
                search_placeholder="Search consumers by name or email"
                records=consumers
            />
        </AppShell>
    }
}
