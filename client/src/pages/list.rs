//! Generic list screen: search, table, delete confirmation, detail view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/<slug>` for every entity kind. On mount it loads the kind's
//! collection through the `Stores` registry; the load is tied to a
//! `CancelToken` released on cleanup so a late response never lands in a
//! disposed page.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::detail_dialog::DetailDialog;
use crate::components::entity_table::EntityTable;
use crate::entity::EntityKind;
use crate::net::cancel::CancelToken;
use crate::routes::create_path;
use crate::state::list::{ListState, LoadStatus};
use crate::store::Stores;

#[component]
pub fn EntityListPage(kind: EntityKind) -> impl IntoView {
    let descriptor = kind.descriptor();
    let repo = expect_context::<Stores>().get(kind);
    let state = RwSignal::new(ListState::new(kind));

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    #[cfg(feature = "hydrate")]
    {
        let repo = std::sync::Arc::clone(&repo);
        leptos::task::spawn_local(async move {
            let result = repo.load(&cancel).await;
            let _ = state.try_update(|s| s.apply_load(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    drop(cancel);

    let rows = Signal::derive(move || state.with(ListState::visible));
    let on_view = Callback::new(move |id: u32| state.update(|s| s.open_detail(id)));
    let on_delete = Callback::new(move |id: u32| state.update(|s| s.request_delete(id)));
    let on_delete_cancel = Callback::new(move |()| state.update(ListState::cancel_delete));
    let on_delete_confirm = Callback::new(move |()| {
        let removed = state.try_update(ListState::confirm_delete).flatten();
        if let Some(record) = removed {
            repo.remove(record.id);
        }
    });
    let on_detail_close = Callback::new(move |()| state.update(ListState::close_detail));

    view! {
        <section class="page entity-page">
            <header class="page__header">
                <h1>{descriptor.title}</h1>
                <a class="btn btn--primary" href=create_path(kind)>
                    {format!("+ Add {}", descriptor.singular)}
                </a>
            </header>

            <Show when=move || state.with(|s| s.notice.is_some())>
                <p class="page__notice">
                    {move || state.with(|s| s.notice.clone()).unwrap_or_default()}
                    <button class="btn btn--small" on:click=move |_| state.update(ListState::dismiss_notice)>
                        "✕"
                    </button>
                </p>
            </Show>

            <input
                class="page__search"
                type="search"
                placeholder=format!(
                    "Search by {} or {}",
                    descriptor.search_fields[0],
                    descriptor.search_fields[1],
                )
                prop:value=move || state.with(|s| s.search.clone())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    state.update(|s| s.set_search(term));
                }
            />

            {move || match state.with(|s| s.status.clone()) {
                LoadStatus::Loading => view! { <p class="page__status">"Loading..."</p> }.into_any(),
                LoadStatus::Failed(message) => {
                    view! { <p class="page__error" role="alert">{message}</p> }.into_any()
                }
                LoadStatus::Ready => {
                    view! { <EntityTable kind=kind rows=rows on_view=on_view on_delete=on_delete /> }
                        .into_any()
                }
            }}

            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog
                    title=format!("Delete {}", descriptor.singular.to_lowercase())
                    message=format!("Are you sure you want to delete this {}?", descriptor.singular.to_lowercase())
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>

            {move || {
                state
                    .with(|s| s.detail.clone())
                    .map(|record| view! { <DetailDialog kind=kind record=record on_close=on_detail_close /> })
            }}
        </section>
    }
}
