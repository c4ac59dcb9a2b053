//! Create, edit and duplicate dialog for objects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened through [`Modal::CreateObject`], [`Modal::EditObject`] or
//! [`Modal::DuplicateObject`]. Creation starts with a type picker; edit and
//! duplicate load the object and its full type schema first. The form itself
//! is rendered by [`ObjectForm`].

use leptos::prelude::*;

use crate::components::object_form::ObjectForm;
#[cfg(feature = "hydrate")]
use crate::net::types::{ObjectField, ObjectPayload, ObjectRecord, ObjectType};
use crate::state::app::{AppAction, AppState, Modal, dispatch};
use crate::state::ui::{ToastKind, ToastState, show_toast};
use crate::util::form::{FormError, FormMode, FormState, OptionLookups};

/// Fetch the categories and managed lists the schema's selects point at.
/// Failed lookups leave their selects empty.
#[cfg(feature = "hydrate")]
pub async fn load_lookups(fields: &[ObjectField]) -> OptionLookups {
    use crate::net::api_schema;
    use crate::util::form::{managed_list_values, required_lookups};

    let (categories, lists) = required_lookups(fields);
    let mut lookups = OptionLookups::default();
    if categories {
        match api_schema::list_categories().await {
            Ok(list) => lookups.categories = list,
            Err(e) => log::warn!("category lookup failed: {e}"),
        }
    }
    for list_id in lists {
        match api_schema::get_managed_list(list_id).await {
            Ok(list) => {
                lookups.managed_lists.insert(list_id, managed_list_values(&list));
            }
            Err(e) => log::warn!("managed list {list_id} lookup failed: {e}"),
        }
    }
    lookups
}

/// Full schema for an object's type, preferring a fresh fetch.
#[cfg(feature = "hydrate")]
async fn schema_for(app: RwSignal<AppState>, object: &ObjectRecord) -> Option<ObjectType> {
    let type_id = object.object_type.as_ref().and_then(|t| t.id);
    if let Some(id) = type_id {
        match crate::net::api_schema::get_object_type(id).await {
            Ok(object_type) => return Some(object_type),
            Err(e) => log::warn!("object type {id} fetch failed: {e}"),
        }
    }
    app.with_untracked(|s| {
        type_id
            .and_then(|id| s.object_type_by_id(id))
            .or_else(|| s.object_type_by_name(object.type_name()))
            .cloned()
    })
}

fn modal_title(modal: Option<&Modal>) -> &'static str {
    match modal {
        Some(Modal::EditObject(_)) => "Redigera objekt",
        Some(Modal::DuplicateObject(_)) => "Duplicera objekt",
        _ => "Skapa nytt objekt",
    }
}

/// Toast text for a failed validation.
fn validation_message(error: &FormError) -> String {
    match error {
        FormError::NoFields => "Formulär ej tillgängligt".to_owned(),
        FormError::MissingRequired(_) => "Fyll i alla obligatoriska fält".to_owned(),
    }
}

#[component]
pub fn ObjectModal() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let form = RwSignal::new(FormState::default());
    let has_form = RwSignal::new(false);
    let lookups = RwSignal::new(OptionLookups::default());
    let selected_type_id = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let modal = Memo::new(move |_| app.with(|s| s.modal.clone()));
    let object_modal = move || {
        matches!(modal.get(), Some(Modal::CreateObject | Modal::EditObject(_) | Modal::DuplicateObject(_)))
    };
    let is_create = move || matches!(modal.get(), Some(Modal::CreateObject));

    let close = Callback::new(move |()| {
        has_form.set(false);
        selected_type_id.set(String::new());
        dispatch(app, AppAction::CloseModal);
    });

    // Edit/duplicate: load the object and build the form from its schema.
    Effect::new(move || {
        let (object_id, mode) = match modal.get() {
            Some(Modal::EditObject(id)) => (id, FormMode::Edit),
            Some(Modal::DuplicateObject(id)) => (id, FormMode::Duplicate),
            _ => return,
        };
        has_form.set(false);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let object = match crate::net::api_objects::get_object(object_id).await {
                    Ok(object) => object,
                    Err(e) => {
                        log::error!("load object {object_id} for editing failed: {e}");
                        show_toast(toasts, ToastKind::Error, "Kunde inte ladda objekt");
                        dispatch(app, AppAction::CloseModal);
                        return;
                    }
                };
                let Some(object_type) = schema_for(app, &object).await else {
                    show_toast(toasts, ToastKind::Error, "Kunde inte ladda objekttyper");
                    dispatch(app, AppAction::CloseModal);
                    return;
                };
                lookups.set(load_lookups(&object_type.fields).await);
                selected_type_id.set(object_type.id.to_string());
                form.set(FormState::new(&object_type, Some(&object), mode));
                has_form.set(true);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (object_id, mode, toasts);
        }
    });

    let on_type_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        selected_type_id.set(value.clone());
        let object_type = value.parse::<i64>().ok().and_then(|id| app.with_untracked(|s| s.object_type_by_id(id).cloned()));
        let Some(object_type) = object_type else {
            has_form.set(false);
            return;
        };
        form.set(FormState::new(&object_type, None, FormMode::Create));
        has_form.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                lookups.set(load_lookups(&object_type.fields).await);
            });
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        if !has_form.get_untracked() {
            let message = if is_create() { "Välj en objekttyp först" } else { "Formulär ej tillgängligt" };
            show_toast(toasts, ToastKind::Error, message);
            return;
        }
        let mut validated = Ok(());
        form.update(|f| validated = f.validate());
        if let Err(error) = validated {
            let message = validation_message(&error);
            show_toast(toasts, ToastKind::Error, message);
            return;
        }
        let state = form.get_untracked();
        let current = modal.get_untracked();
        saving.set(true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                use crate::net::api_objects;

                let payload = ObjectPayload { object_type_id: state.object_type_id, data: state.to_data() };
                let result = match current {
                    Some(Modal::EditObject(id)) => {
                        api_objects::update_object(id, &payload).await.map(|_| "Objekt uppdaterat")
                    }
                    Some(Modal::DuplicateObject(id)) => {
                        api_objects::duplicate_object(id, &payload.data).await.map(|_| "Objekt skapat")
                    }
                    _ => api_objects::create_object(&payload).await.map(|_| "Objekt skapat"),
                };
                saving.set(false);
                match result {
                    Ok(message) => {
                        show_toast(toasts, ToastKind::Success, message);
                        has_form.set(false);
                        selected_type_id.set(String::new());
                        dispatch(app, AppAction::CloseModal);
                        dispatch(app, AppAction::DataChanged);
                    }
                    Err(e) => {
                        log::error!("save object failed: {e}");
                        show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte spara objekt"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (state, current);
            saving.set(false);
        }
    };

    let type_options = move || {
        app.with(|s| s.object_types.clone())
            .into_iter()
            .map(|t| view! { <option value=t.id.to_string()>{t.name}</option> })
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=object_modal>
            <div class="dialog-backdrop" on:click=move |_| close.run(())>
                <div class="dialog dialog--object" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>{move || modal_title(modal.get().as_ref())}</h2>
                        <button class="btn btn--icon" title="Stäng" on:click=move |_| close.run(())>"×"</button>
                    </div>
                    <form class="object-form" on:submit=on_save>
                        <div class="form-group">
                            <label for="object-type-select">"Objekttyp"</label>
                            <select
                                id="object-type-select"
                                disabled=move || !is_create()
                                prop:value=move || selected_type_id.get()
                                on:change=on_type_change
                            >
                                <option value="">"Välj objekttyp..."</option>
                                {type_options}
                            </select>
                        </div>
                        <Show when=move || has_form.get()>
                            <ObjectForm form=form lookups=lookups />
                        </Show>
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
