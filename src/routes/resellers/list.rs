//! Reseller directory route. Same shape as the consumer directory but
//! searches on business name instead of personal name.

use leptos::prelude::*;

use crate::{
    app_lib::remote::use_remote,
    components::{AppShell, UserDirectory},
    features::users::client,
};

#[component]
pub fn ResellersListPage() -> impl IntoView {
    let resellers = use_remote(|| (), |()| async { client::list_resellers().await });

    view! {
        <AppShell>
            <UserDirectory
                title="Resellers"
                description="All reseller businesses registered on Shopme."
                icon="storefront"
                empty_label="resellers"
                search_placeholder="Search resellers by business name or email"
                records=resellers
            />
        </AppShell>
    }
}
