//! Generic create screen.
//!
//! Validates the draft, hands it to the kind's repository, and returns to the
//! list after the success banner has been visible for `REDIRECT_DELAY`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::record_form::RecordForm;
#[cfg(feature = "hydrate")]
use crate::components::record_form::schedule_redirect;
use crate::entity::EntityKind;
use crate::net::cancel::CancelToken;
use crate::routes::list_path;
use crate::state::form::{FormPhase, FormState};
#[cfg(not(feature = "hydrate"))]
use crate::store::StoreError;
use crate::store::Stores;

#[component]
pub fn EntityCreatePage(kind: EntityKind) -> impl IntoView {
    let descriptor = kind.descriptor();
    let repo = expect_context::<Stores>().get(kind);
    let form = RwSignal::new(FormState::create(kind));

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

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
        let repo = std::sync::Arc::clone(&repo);
        let cancel = cancel.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = repo.create(draft, &cancel).await;
            let created = result.is_ok();
            if form.try_update(|f| f.finish_submit(result)).is_some() && created {
                schedule_redirect(form);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("{:?} create skipped off-browser: {draft:?}", repo.kind());
            drop(cancel);
            form.update(|f| f.finish_submit(Err(StoreError::Local("not available on server".to_owned()))));
        }
    });

    view! {
        <section class="page form-page">
            <header class="page__header">
                <h1>{format!("Add {}", descriptor.singular)}</h1>
            </header>
            <RecordForm form=form submit_label="Add" on_submit=on_submit />
        </section>
    }
}
