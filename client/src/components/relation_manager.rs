//! Relations tab: grouped relation tables with add and delete.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::relation_modal::RelationModal;
use crate::net::types::Relation;
use crate::state::app::{AppAction, AppState, Modal, dispatch};
use crate::state::relations::{RELATIONS_EMPTY_TEXT, RelationRow, group_relations};
use crate::state::ui::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::ui::{ToastKind, show_toast};

#[component]
pub fn RelationManager(object_id: i64, relations: RwSignal<Vec<Relation>>, on_changed: Callback<()>) -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let pending_delete = RwSignal::new(None::<RelationRow>);

    let open_add = move |relation_type: Option<String>| {
        dispatch(app, AppAction::OpenModal(Modal::AddRelation { object_id, relation_type }));
    };

    let delete_confirmed = Callback::new(move |()| {
        let Some(row) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_objects::delete_relation(row.owner_object_id, row.relation_id).await {
                    Ok(()) => {
                        show_toast(toasts, ToastKind::Success, "Relation borttagen");
                        on_changed.run(());
                        dispatch(app, AppAction::DataChanged);
                    }
                    Err(e) => {
                        log::error!("delete relation {} failed: {e}", row.relation_id);
                        show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte ta bort relation"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (row, toasts);
        }
    });

    let groups = move || {
        let grouped = relations.with(|list| app.with(|s| group_relations(list, &s.display_fields)));
        if grouped.is_empty() {
            return view! { <p class="empty-state">{RELATIONS_EMPTY_TEXT}</p> }.into_any();
        }
        grouped
            .into_iter()
            .map(|group| {
                let relation_type = group.relation_type.clone();
                let key = group.key();
                let heading = group.heading();
                let rows = group
                    .rows
                    .into_iter()
                    .map(|row| {
                        let linked_id = row.linked_id;
                        let delete_row = row.clone();
                        let aria = format!("Ta bort relation med {}", row.linked_name);
                        view! {
                            <tr class="relation-row">
                                <td class="relation-id">
                                    <a
                                        href="#"
                                        class="relation-link"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            if let Some(id) = linked_id {
                                                dispatch(app, AppAction::OpenObject(id));
                                            }
                                        }
                                    >
                                        {row.linked_auto_id.clone()}
                                    </a>
                                </td>
                                <td class="relation-name">
                                    <strong>{row.linked_name.clone()}</strong>
                                    {row.description.clone().map(|d| view! { <br /><small class="relation-description">{d}</small> })}
                                </td>
                                <td class="relation-type-cell">{row.linked_type.clone()}</td>
                                <td class="relation-actions-cell">
                                    <button
                                        class="btn btn--icon btn--danger"
                                        title="Ta bort"
                                        aria-label=aria
                                        on:click=move |_| pending_delete.set(Some(delete_row.clone()))
                                    >
                                        "🗑"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <div class="relations-section" data-key=key>
                        <div class="relations-section-header">
                            <h4>{heading}</h4>
                            <button class="btn btn--small btn--primary" on:click=move |_| open_add(Some(relation_type.clone()))>
                                "+ Lägg till"
                            </button>
                        </div>
                        <table class="relations-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Namn"</th>
                                    <th>"Typ"</th>
                                    <th class="col-actions"></th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="relation-manager">
            <div class="view-header">
                <h3>"Relationer"</h3>
                <button class="btn btn--primary" on:click=move |_| open_add(None)>"Lägg till relation"</button>
            </div>
            {groups}
            <RelationModal object_id=object_id on_saved=on_changed />
            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    message="Är du säker på att du vill ta bort denna relation?"
                    on_confirm=delete_confirmed
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </div>
    }
}
