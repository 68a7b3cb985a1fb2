//! Admin dashboard for the Shopme marketplace. Client-side rendered
//! Leptos app that browses consumer and reseller accounts and their
//! posts, requirements, and catalogs over the backend JSON API.

mod app;
#[path = "lib/mod.rs"]
mod app_lib;
mod components;
mod features;
mod routes;

pub use app::App;
