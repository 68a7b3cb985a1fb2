//! Landing page linking to the two user directories.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::{components::AppShell, routes::paths};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900">"Shopme Admin"</h1>
                    <p class="text-sm text-gray-500">
                        "Browse marketplace accounts and their activity."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <A
                        href={paths::CONSUMERS}
                        {..}
                        class="group p-6 bg-white rounded-xl border border-gray-200 shadow-sm hover:border-indigo-500 transition-all"
                    >
                        <div class="flex items-center gap-4">
                            <div class="p-3 bg-indigo-50 rounded-lg text-indigo-600 group-hover:scale-110 transition-transform">
                                <span class="material-symbols-outlined">"group"</span>
                            </div>
                            <div>
                                <h2 class="font-semibold text-gray-900">"Consumers"</h2>
                                <p class="text-sm text-gray-500">
                                    "People buying on the marketplace."
                                </p>
                            </div>
                        </div>
                    </A>
                    <A
                        href={paths::RESELLERS}
                        {..}
                        class="group p-6 bg-white rounded-xl border border-gray-200 shadow-sm hover:border-indigo-500 transition-all"
                    >
                        <div class="flex items-center gap-4">
                            <div class="p-3 bg-emerald-50 rounded-lg text-emerald-600 group-hover:scale-110 transition-transform">
                                <span class="material-symbols-outlined">"storefront"</span>
                            </div>
                            <div>
                                <h2 class="font-semibold text-gray-900">"Resellers"</h2>
                                <p class="text-sm text-gray-500">
                                    "Businesses selling on the marketplace."
                                </p>
                            </div>
                        </div>
                    </A>
                </div>

                <p class="text-xs text-gray-400">
                    <A href={paths::HEALTH} {..} class="hover:text-indigo-600 transition-colors">
                        "Build info"
                    </A>
                </p>
            </div>
        </AppShell>
    }
}
