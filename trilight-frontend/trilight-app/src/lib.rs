pub(crate) mod components;
pub mod error;
pub(crate) mod main_nav;
pub mod routes;

use crate::main_nav::MainNav;
use crate::routes::analytics::AnalyticsView;
use crate::routes::not_found::NotFound;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Root of the analytics view. Takes no inputs: the dashboard renders the
/// fixed dataset from `trilight-api-types`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/static/main.css" />
        <Title text="TriLight Homes" />
        <Router>
            <MainNav />
            <main class="mt-6">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("") view=AnalyticsView />
                </Routes>
            </main>
        </Router>
    }
}
