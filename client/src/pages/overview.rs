//! Landing page at `/` with one card per entity section.

use leptos::prelude::*;

use crate::entity::EntityKind;
use crate::routes::{create_path, list_path};

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <section class="page overview-page">
            <header class="page__header">
                <h1>"Dashboard"</h1>
            </header>
            <div class="overview-page__cards">
                {EntityKind::ALL
                    .into_iter()
                    .map(|kind| {
                        let descriptor = kind.descriptor();
                        view! {
                            <div class="overview-card">
                                <a class="overview-card__title" href=list_path(kind)>
                                    {descriptor.title}
                                </a>
                                <a class="overview-card__add" href=create_path(kind)>
                                    {format!("+ Add {}", descriptor.singular.to_lowercase())}
                                </a>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
