//! Static placeholder sections (`/reports`, `/settings`).

use leptos::prelude::*;

#[component]
pub fn SectionPage(title: &'static str) -> impl IntoView {
    view! {
        <section class="page section-page">
            <header class="page__header">
                <h1>{title}</h1>
            </header>
        </section>
    }
}
