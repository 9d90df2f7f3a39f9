//! Table of records for one entity kind with per-row actions.

use leptos::prelude::*;

use crate::entity::{EntityKind, Record};
use crate::routes::edit_path;

/// Renders `rows` with one column per descriptor field plus an actions
/// column (view, edit link, delete).
#[component]
pub fn EntityTable(
    kind: EntityKind,
    #[prop(into)] rows: Signal<Vec<Record>>,
    on_view: Callback<u32>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let descriptor = kind.descriptor();

    view! {
        <table class="entity-table">
            <thead>
                <tr>
                    <th class="entity-table__id">"#"</th>
                    {descriptor.fields.iter().map(|field| view! { <th>{field.label}</th> }).collect::<Vec<_>>()}
                    <th class="entity-table__actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = rows.get();
                    if rows.is_empty() {
                        let span = descriptor.fields.len() + 2;
                        return view! {
                            <tr>
                                <td class="entity-table__empty" colspan=span.to_string()>
                                    {format!("No {} found.", descriptor.title.to_lowercase())}
                                </td>
                            </tr>
                        }
                        .into_any();
                    }
                    rows.into_iter()
                        .map(|record| {
                            let id = record.id;
                            view! {
                                <tr>
                                    <td class="entity-table__id">{id}</td>
                                    {descriptor
                                        .fields
                                        .iter()
                                        .map(|field| view! { <td>{record.get(field.key).to_owned()}</td> })
                                        .collect::<Vec<_>>()}
                                    <td class="entity-table__actions">
                                        <button class="btn btn--small" title="View" on:click=move |_| on_view.run(id)>
                                            "View"
                                        </button>
                                        <a class="btn btn--small" title="Edit" href=edit_path(kind, id)>
                                            "Edit"
                                        </a>
                                        <button
                                            class="btn btn--small btn--danger"
                                            title="Delete"
                                            on:click=move |_| on_delete.run(id)
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}
