use leptos::prelude::*;

use crate::components::icon::Icon;

#[component]
pub fn MainNav() -> impl IntoView {
    view! {
        <header class="header bg-blue-600 text-white">
            <div class="flex flex-row items-center justify-between gap-4 p-4">
                <a class="text-2xl font-bold" href="/">
                    "TriLight Homes"
                </a>
                <nav class="flex flex-row items-center gap-4">
                    <a class="nav-item flex items-center gap-1" href="/">
                        <Icon icon=icondata::FaChartLineSolid />
                        "Dashboard"
                    </a>
                    <a class="nav-item flex items-center gap-1" href="/properties">
                        <Icon icon=icondata::FaHouseSolid />
                        "Properties"
                    </a>
                    <a class="nav-item flex items-center gap-1" href="/market">
                        <Icon icon=icondata::FaGlobeSolid />
                        "Market"
                    </a>
                    <a class="nav-item flex items-center gap-1" href="/reports">
                        <Icon icon=icondata::FaListSolid />
                        "Reports"
                    </a>
                </nav>
            </div>
        </header>
    }
}
