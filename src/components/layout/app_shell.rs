//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup and the mobile menu toggle so routes can
//! focus on content. The dashboard is read-only; it talks to the public
//! backend API and holds no session state.

use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

use crate::routes::paths;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let location = use_location();
    let pathname = move || location.pathname.get();

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 bg-white">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href={paths::HOME}
                        {..}
                        class="flex items-center space-x-3"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span
                            class="material-symbols-outlined text-3xl text-indigo-600"
                            aria-hidden="true"
                        >
                            "storefront"
                        </span>
                        <span class="text-lg font-semibold whitespace-nowrap text-gray-900">
                            "Shopme Admin"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200"
                        data-collapse-toggle="navbar-default"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col gap-1 p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:gap-6 md:mt-0 md:border-0 md:bg-white">
                            <li>
                                <NavLink
                                    target=paths::CONSUMERS
                                    label="Consumers"
                                    active=Signal::derive(move || {
                                        pathname().starts_with("/admin/consumer")
                                    })
                                    on_navigate=set_menu_open
                                />
                            </li>
                            <li>
                                <NavLink
                                    target=paths::RESELLERS
                                    label="Resellers"
                                    active=Signal::derive(move || {
                                        pathname().starts_with("/admin/reseller")
                                    })
                                    on_navigate=set_menu_open
                                />
                            </li>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}

#[component]
fn NavLink(
    target: &'static str,
    label: &'static str,
    active: Signal<bool>,
    on_navigate: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <A
            href={target}
            {..}
            attr:class="block py-2 px-3 rounded-md transition-colors hover:bg-indigo-50 md:hover:bg-transparent md:hover:text-indigo-600"
            class:text-indigo-600=move || active.get()
            class:font-semibold=move || active.get()
            class:text-gray-700=move || !active.get()
            on:click=move |_| on_navigate.set(false)
        >
            {label}
        </A>
    }
}
