//! Objects page: filtered object list or tree, with the detail panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route. List mode renders a [`SystemTable`] over the objects
//! of the selected type with the detail panel beside it; tree mode swaps in
//! the [`TreeView`] and the side-layout panel. Both modes refetch whenever
//! `AppState::data_version` moves.

#[cfg(test)]
#[path = "objects_test.rs"]
mod objects_test;

use leptos::prelude::*;

use crate::components::detail_panel::DetailPanel;
use crate::components::object_modal::ObjectModal;
use crate::components::system_table::SystemTable;
use crate::components::tree_view::TreeView;
use crate::net::types::{ObjectQuery, ObjectRecord, ObjectType};
use crate::state::app::{AppAction, AppState, Modal, View, dispatch};
use crate::state::detail::PanelLayout;
use crate::state::objects::{OBJECTS_EMPTY_TEXT, ObjectRow, object_columns};
use crate::state::ui::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::ui::{ToastKind, show_toast};

/// Query for the list: every object of the selected type, or all objects.
pub fn list_query(selected_type: Option<&str>) -> ObjectQuery {
    ObjectQuery { object_type: selected_type.map(str::to_owned), ..ObjectQuery::default() }
}

/// Wrapper class; the list narrows while the detail panel is open.
pub fn list_wrapper_class(panel_open: bool) -> &'static str {
    if panel_open { "objects-container-wrapper panel-open" } else { "objects-container-wrapper" }
}

/// Type filter choices as `(name, selected)`.
pub fn type_filter_options(types: &[ObjectType], current: &str) -> Vec<(String, bool)> {
    types.iter().map(|t| (t.name.clone(), t.name == current)).collect()
}

#[component]
pub fn ObjectsPage() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    Effect::new(move || dispatch(app, AppAction::SwitchView(View::Objects)));

    let records = RwSignal::new(Vec::<ObjectRecord>::new());
    let selected_type = Memo::new(move |_| app.with(|s| s.selected_type.clone()));
    let data_version = Memo::new(move |_| app.with(|s| s.data_version));
    let tree_active = Memo::new(move |_| app.with(|s| s.tree_view_active));

    Effect::new(move || {
        let query = list_query(selected_type.get().as_deref());
        let _ = data_version.get();
        if tree_active.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_objects::list_objects(&query).await {
                    Ok(list) => records.set(list),
                    Err(e) => {
                        log::error!("load objects failed: {e}");
                        show_toast(toasts, ToastKind::Error, "Kunde inte ladda objekt");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, toasts);
        }
    });

    let rows = Signal::derive(move || {
        let display_fields = app.with(|s| s.display_fields.clone());
        records.with(|list| list.iter().cloned().map(|r| ObjectRow::new(r, &display_fields)).collect::<Vec<_>>())
    });
    let columns = Memo::new(move |_| app.with(|s| object_columns(s.selected_object_type())));
    let open_row = Callback::new(move |row: ObjectRow| dispatch(app, AppAction::OpenObject(row.record.id)));
    let is_active = Callback::new(move |row: ObjectRow| app.with_untracked(|s| s.current_object_id) == Some(row.record.id));

    let type_options = move || {
        let current = selected_type.get().unwrap_or_default();
        app.with(|s| type_filter_options(&s.object_types, &current))
            .into_iter()
            .map(|(name, selected)| view! { <option value=name.clone() selected=selected>{name.clone()}</option> })
            .collect::<Vec<_>>()
    };

    let list_view = move || {
        view! {
            <div class=move || list_wrapper_class(app.with(|s| s.current_object_id.is_some()))>
                <SystemTable rows=rows columns=columns on_row_click=open_row is_active=is_active empty_text=OBJECTS_EMPTY_TEXT />
            </div>
            <DetailPanel layout=PanelLayout::Detail />
        }
    };

    let tree_view = move || {
        view! {
            <div class="tree-container">
                <div class="tree-view-container">
                    <TreeView />
                </div>
                <div class="side-panel-container">
                    <DetailPanel layout=PanelLayout::Side />
                </div>
            </div>
        }
    };

    view! {
        <section class="view objects-view">
            <div class="view-header">
                <h2>"Objekt"</h2>
                <div class="view-actions">
                    <select
                        class="type-filter"
                        on:change=move |ev| dispatch(app, AppAction::SelectType(Some(event_target_value(&ev))))
                    >
                        <option value="">"Alla typer"</option>
                        {type_options}
                    </select>
                    <button class="btn" on:click=move |_| dispatch(app, AppAction::ToggleTreeView)>
                        {move || if tree_active.get() { "Listvy" } else { "Trädvy" }}
                    </button>
                    <button class="btn btn--primary" on:click=move |_| dispatch(app, AppAction::OpenModal(Modal::CreateObject))>
                        "Skapa nytt objekt"
                    </button>
                </div>
            </div>
            <Show when=move || tree_active.get() fallback=list_view>
                {tree_view}
            </Show>
            <ObjectModal />
        </section>
    }
}
