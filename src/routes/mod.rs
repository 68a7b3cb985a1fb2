mod consumers;
mod health;
mod home;
mod not_found;
mod resellers;
pub(crate) mod sections;

pub(crate) use consumers::{ConsumerDetailPage, ConsumersListPage};
pub(crate) use health::HealthPage;
pub(crate) use home::HomePage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use resellers::{ResellerDetailPage, ResellersListPage};

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Route paths used by links across the app.
pub(crate) mod paths {
    pub(crate) const HOME: &str = "/";
    pub(crate) const CONSUMERS: &str = "/admin/consumers";
    pub(crate) const RESELLERS: &str = "/admin/resellers";
    pub(crate) const HEALTH: &str = "/health";

    pub(crate) fn consumer_detail(id: &str) -> String {
        format!("/admin/consumer/{id}")
    }

    pub(crate) fn reseller_detail(id: &str) -> String {
        format!("/admin/reseller/{id}")
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/admin/consumers") view=ConsumersListPage />
            <Route path=path!("/admin/consumer/:id") view=ConsumerDetailPage />
            <Route path=path!("/admin/resellers") view=ResellersListPage />
            <Route path=path!("/admin/reseller/:id") view=ResellerDetailPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
