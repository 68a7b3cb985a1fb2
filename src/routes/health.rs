use crate::app_lib::build_info;
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();
    let version = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="block max-w-[38rem] rounded-lg border border-neutral-200 bg-white">
                    <div class="border-b-2 border-[#0000002d] px-6 py-3 font-semibold text-neutral-600">
                        "Build Version"
                    </div>
                    <div class="p-6">
                        <div class="text-base text-black">
                            <pre class="text-center">{version}</pre>
                            <pre class="text-center">{commit}</pre>
                        </div>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
