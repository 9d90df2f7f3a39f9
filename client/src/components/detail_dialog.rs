//! Read-only record overlay.

use leptos::prelude::*;

use crate::entity::{EntityKind, Record};

#[component]
pub fn DetailDialog(kind: EntityKind, record: Record, on_close: Callback<()>) -> impl IntoView {
    let descriptor = kind.descriptor();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--detail" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("{} #{}", descriptor.singular, record.id)}</h2>
                <dl class="dialog__fields">
                    {descriptor
                        .fields
                        .iter()
                        .map(|field| {
                            view! {
                                <dt>{field.label}</dt>
                                <dd>{record.get(field.key).to_owned()}</dd>
                            }
                        })
                        .collect::<Vec<_>>()}
                </dl>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
