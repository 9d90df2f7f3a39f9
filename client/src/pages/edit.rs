//! Generic edit screen.
//!
//! DESIGN
//! ======
//! The `:id` segment is resolved against the kind's repository. An unknown
//! or malformed id sends the user straight back to the list without
//! rendering a form. Edits are accepted through `Repository::update`, which
//! logs them; nothing is written back to the collection.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::record_form::{RecordForm, schedule_redirect};
use crate::entity::{EntityKind, Record};
use crate::routes::{list_path, parse_id};
use crate::state::form::{FormPhase, FormState};
use crate::store::Stores;

#[component]
pub fn EntityEditPage(kind: EntityKind) -> impl IntoView {
    let repo = expect_context::<Stores>().get(kind);
    let params = use_params_map();
    let found = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .as_deref()
            .and_then(parse_id)
            .and_then(|id| repo.lookup(id))
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if found.with(Option::is_none) {
            log::info!("no {kind:?} for requested id; returning to list");
            navigate(&list_path(kind), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <section class="page form-page">
            {move || match found.get() {
                Some(record) => view! { <EditForm kind=kind record=record /> }.into_any(),
                None => view! { <p class="page__status">"Redirecting..."</p> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn EditForm(kind: EntityKind, record: Record) -> impl IntoView {
    let descriptor = kind.descriptor();
    let repo = expect_context::<Stores>().get(kind);
    let id = record.id;
    let form = RwSignal::new(FormState::edit(kind, &record));

    let navigate = use_navigate();
    Effect::new(move || {
        if form.with(|f| f.phase == FormPhase::Redirecting) {
            navigate(&list_path(kind), NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |()| {
        let Some(Ok(draft)) = form.try_update(FormState::begin_submit) else {
            return;
        };
        let updated = repo.update(id, &draft);
        form.update(|f| f.finish_submit(Ok(updated)));
        schedule_redirect(form);
    });

    view! {
        <header class="page__header">
            <h1>{format!("Edit {}", descriptor.singular)}</h1>
        </header>
        <RecordForm form=form submit_label="Save" on_submit=on_submit />
    }
}
