//! Generic create/edit form driven by an entity descriptor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Create and edit pages own a `RwSignal<FormState>` and hand it here. The
//! form renders one control per field, shows the validation/API error or the
//! success banner, and calls `on_submit` when the user submits. Navigation
//! back to the list is the page's job once the phase reaches `Redirecting`.

use leptos::prelude::*;

use crate::config::REDIRECT_DELAY;
use crate::entity::{FieldInput, FieldSpec};
use crate::routes::list_path;
use crate::state::form::{FormPhase, FormState};

#[component]
pub fn RecordForm(
    form: RwSignal<FormState>,
    #[prop(into)] submit_label: String,
    on_submit: Callback<()>,
) -> impl IntoView {
    let kind = form.with_untracked(|f| f.kind);
    let descriptor = kind.descriptor();

    view! {
        <form
            class="record-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                if !form.with_untracked(FormState::is_busy) {
                    on_submit.run(());
                }
            }
        >
            <Show when=move || form.with(|f| f.banner().is_some())>
                <p class="record-form__banner">{move || form.with(FormState::banner).unwrap_or_default()}</p>
            </Show>
            <Show when=move || form.with(|f| f.error().is_some())>
                <p class="record-form__error" role="alert">
                    {move || form.with(|f| f.error().map(str::to_owned)).unwrap_or_default()}
                </p>
            </Show>
            {descriptor.fields.iter().map(|field| field_control(form, field)).collect::<Vec<_>>()}
            <div class="record-form__actions">
                <a class="btn" href=list_path(kind)>
                    "Cancel"
                </a>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || form.with(FormState::is_busy)
                >
                    {move || {
                        if form.with(|f| f.phase == FormPhase::Submitting) {
                            "Saving...".to_owned()
                        } else {
                            submit_label.clone()
                        }
                    }}
                </button>
            </div>
        </form>
    }
}

fn field_control(form: RwSignal<FormState>, field: &'static FieldSpec) -> AnyView {
    let key = field.key;
    let value = move || form.with(|f| f.draft.get(key).to_owned());
    let control = match field.input {
        FieldInput::Choice(options) => view! {
            <select
                class="record-form__input"
                name=key
                prop:value=value
                on:change=move |ev| {
                    let next = event_target_value(&ev);
                    form.update(|f| f.set_field(key, next));
                }
            >
                <option value="" disabled=true>
                    {format!("Select {}", field.label.to_lowercase())}
                </option>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
        input => view! {
            <input
                class="record-form__input"
                type=input.html_type()
                name=key
                prop:value=value
                on:input=move |ev| {
                    let next = event_target_value(&ev);
                    form.update(|f| f.set_field(key, next));
                }
            />
        }
        .into_any(),
    };

    view! {
        <label class="record-form__field">
            <span class="record-form__label">
                {field.label}
                {field.required.then_some(" *")}
            </span>
            {control}
        </label>
    }
    .into_any()
}

/// Move a succeeded form to `Redirecting` after `REDIRECT_DELAY`. A page torn
/// down before the delay elapses is left alone.
pub fn schedule_redirect(form: RwSignal<FormState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(REDIRECT_DELAY).await;
        let _ = form.try_update(FormState::start_redirect);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("redirect after {REDIRECT_DELAY:?} applied immediately off-browser");
        form.update(FormState::start_redirect);
    }
}
