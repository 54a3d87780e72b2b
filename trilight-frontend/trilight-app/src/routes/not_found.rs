use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found - TriLight Homes" />
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center space-y-4">
            <h1 class="text-4xl font-bold">"404"</h1>
            <p class="text-lg">"This page is not part of the analytics preview."</p>
            <a class="btn-primary" href="/">
                "Back to the dashboard"
            </a>
        </div>
    }
}
