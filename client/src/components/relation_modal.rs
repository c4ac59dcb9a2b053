//! Add-relation dialog: pick a target object, a relation type and an
//! optional description.

use leptos::prelude::*;

use crate::net::types::ObjectRecord;
use crate::state::app::{AppAction, AppState, Modal, dispatch};
use crate::state::objects::relation_target_options;
use crate::state::relations::RelationDraft;
use crate::state::ui::{ToastKind, ToastState, show_toast};
use crate::util::format::{RELATION_TYPES, relation_type_label};

#[component]
pub fn RelationModal(object_id: i64, on_saved: Callback<()>) -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let draft = RwSignal::new(RelationDraft::default());
    let candidates = RwSignal::new(Vec::<ObjectRecord>::new());
    let filter = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let open_type = Memo::new(move |_| {
        app.with(|s| match &s.modal {
            Some(Modal::AddRelation { object_id: id, relation_type }) if *id == object_id => {
                Some(relation_type.clone())
            }
            _ => None,
        })
    });

    Effect::new(move || {
        let Some(relation_type) = open_type.get() else {
            return;
        };
        draft.set(RelationDraft::with_type(relation_type.as_deref()));
        filter.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let query = crate::net::types::ObjectQuery::default();
                match crate::net::api_objects::list_objects(&query).await {
                    Ok(list) => candidates.set(list),
                    Err(e) => {
                        log::error!("load relation targets failed: {e}");
                        show_toast(toasts, ToastKind::Error, "Kunde inte ladda objekt");
                    }
                }
            });
        }
    });

    let close = Callback::new(move |()| dispatch(app, AppAction::CloseModal));

    let options = move || {
        let needle = filter.get().trim().to_lowercase();
        let all = candidates.with(|c| app.with(|s| relation_target_options(c, object_id, &s.display_fields)));
        all.into_iter()
            .filter(|(_, label)| needle.is_empty() || label.to_lowercase().contains(&needle))
            .map(|(id, label)| view! { <option value=id.to_string()>{label}</option> })
            .collect::<Vec<_>>()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let Some(payload) = draft.with_untracked(RelationDraft::payload) else {
            show_toast(toasts, ToastKind::Error, "Välj målobjekt och relationstyp");
            return;
        };
        saving.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api_objects::add_relation(object_id, &payload).await;
                saving.set(false);
                match result {
                    Ok(_) => {
                        show_toast(toasts, ToastKind::Success, "Relation skapad");
                        dispatch(app, AppAction::CloseModal);
                        dispatch(app, AppAction::DataChanged);
                        on_saved.run(());
                    }
                    Err(e) => {
                        log::error!("create relation from {object_id} failed: {e}");
                        show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte skapa relation"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, on_saved, toasts);
            saving.set(false);
        }
    };

    view! {
        <Show when=move || open_type.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| close.run(())>
                <div class="dialog dialog--relation" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>"Lägg till relation"</h2>
                        <button class="btn btn--icon" title="Stäng" on:click=move |_| close.run(())>"×"</button>
                    </div>
                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="relation-target-search">"Sök målobjekt"</label>
                            <input
                                type="search"
                                id="relation-target-search"
                                placeholder="Filtrera på namn eller typ..."
                                prop:value=move || filter.get()
                                on:input=move |ev| filter.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="relation-target">"Målobjekt *"</label>
                            <select
                                id="relation-target"
                                size="8"
                                on:change=move |ev| {
                                    let target = event_target_value(&ev).parse().ok();
                                    draft.update(|d| d.target_object_id = target);
                                }
                            >
                                {options}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="relation-type">"Relationstyp *"</label>
                            <select
                                id="relation-type"
                                prop:value=move || draft.with(|d| d.relation_type.clone())
                                on:change=move |ev| {
                                    let relation_type = event_target_value(&ev);
                                    draft.update(|d| d.relation_type = relation_type);
                                }
                            >
                                <option value="">"Välj relationstyp..."</option>
                                {RELATION_TYPES
                                    .iter()
                                    .map(|t| view! { <option value=*t>{relation_type_label(t)}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="relation-description">"Beskrivning"</label>
                            <textarea
                                id="relation-description"
                                rows="3"
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| {
                                    let description = event_target_value(&ev);
                                    draft.update(|d| d.description = description);
                                }
                            ></textarea>
                        </div>
                        <div class="dialog__actions">
                            <button type="button" class="btn" on:click=move |_| close.run(())>"Avbryt"</button>
                            <button type="submit" class="btn btn--primary" disabled=move || saving.get()>"Spara"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
