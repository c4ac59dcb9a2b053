//! Object detail panel with lazily loaded tabs and back/forward history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows `AppState::current_object_id`. The list page renders it in the
//! `Detail` layout beside the table; the tree page renders it in the `Side`
//! layout. Relations and documents are fetched the first time their tab is
//! opened for an object and kept until another object is opened.
//!
//! Every opened object is recorded in the session-scoped [`DetailHistory`]
//! context; the back/forward buttons walk it.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::file_upload::FileUpload;
use crate::components::relation_manager::RelationManager;
use crate::net::types::{Document, ObjectRecord, Relation};
use crate::state::app::{AppAction, AppState, Modal, dispatch};
use crate::state::detail::{DetailState, DetailTab, EMPTY_DATA_TEXT, PanelLayout, detail_entries, header_rows};
use crate::state::history::DetailHistory;
use crate::state::ui::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::{
    detail::DETAIL_LOAD_ERROR,
    ui::{ToastKind, show_toast},
};
use crate::util::display_name::resolve_object_display_name;

/// Fetch the relations tab content for `object_id`.
fn load_relations(object_id: i64, relations: RwSignal<Vec<Relation>>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api_objects::list_relations(object_id).await {
                Ok(list) => relations.set(list),
                Err(e) => {
                    log::error!("load relations for {object_id} failed: {e}");
                    show_toast(toasts, ToastKind::Error, "Kunde inte ladda relationer");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (object_id, relations, toasts);
    }
}

/// Fetch the documents tab content for `object_id`.
fn load_documents(object_id: i64, documents: RwSignal<Vec<Document>>, toasts: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api_objects::list_documents(object_id).await {
                Ok(list) => documents.set(list),
                Err(e) => {
                    log::error!("load documents for {object_id} failed: {e}");
                    show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte ladda dokument"));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (object_id, documents, toasts);
    }
}

#[component]
pub fn DetailPanel(layout: PanelLayout) -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let history = expect_context::<RwSignal<DetailHistory>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let detail = RwSignal::new(DetailState::default());
    let object = RwSignal::new(None::<ObjectRecord>);
    let relations = RwSignal::new(Vec::<Relation>::new());
    let documents = RwSignal::new(Vec::<Document>::new());
    let confirm_delete = RwSignal::new(false);

    let current_id = Memo::new(move |_| app.with(|s| s.current_object_id));
    let data_version = Memo::new(move |_| app.with(|s| s.data_version));

    // A newly opened object resets the tabs and is recorded in history.
    Effect::new(move || {
        match current_id.get() {
            Some(id) => {
                detail.update(|d| d.open(id));
                if object.with_untracked(|o| o.as_ref().map(|o| o.id)) != Some(id) {
                    object.set(None);
                }
                relations.set(Vec::new());
                documents.set(Vec::new());
                history.update(|h| {
                    if h.visit(id) {
                        h.persist();
                    }
                });
            }
            None => {
                detail.update(DetailState::close);
                object.set(None);
            }
        }
    });

    // (Re)load the object itself; also after edits elsewhere.
    Effect::new(move || {
        let _ = data_version.get();
        let Some(id) = current_id.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_objects::get_object(id).await {
                    Ok(record) => {
                        if current_id.get_untracked() == Some(id) {
                            object.set(Some(record));
                        }
                    }
                    Err(e) => {
                        log::error!("load object {id} failed: {e}");
                        show_toast(toasts, ToastKind::Error, DETAIL_LOAD_ERROR);
                        dispatch(app, AppAction::CloseObject);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let switch_tab = move |tab: DetailTab| {
        let mut needs_load = false;
        detail.update(|d| needs_load = d.switch_tab(tab));
        let Some(id) = current_id.get_untracked() else {
            return;
        };
        if needs_load {
            detail.update(|d| d.mark_loaded(tab));
            match tab {
                DetailTab::Relations => load_relations(id, relations, toasts),
                DetailTab::Documents => load_documents(id, documents, toasts),
                DetailTab::Details => {}
            }
        }
    };

    let reload_relations = Callback::new(move |()| {
        if let Some(id) = current_id.get_untracked() {
            load_relations(id, relations, toasts);
        }
    });
    let reload_documents = Callback::new(move |()| {
        if let Some(id) = current_id.get_untracked() {
            load_documents(id, documents, toasts);
        }
    });

    let go_back = move |_| {
        let mut target = None;
        history.update(|h| {
            target = h.back();
            h.persist();
        });
        if let Some(id) = target {
            dispatch(app, AppAction::OpenObject(id));
        }
    };
    let go_forward = move |_| {
        let mut target = None;
        history.update(|h| {
            target = h.forward();
            h.persist();
        });
        if let Some(id) = target {
            dispatch(app, AppAction::OpenObject(id));
        }
    };

    let open_modal = move |make: fn(i64) -> Modal| {
        if let Some(id) = current_id.get_untracked() {
            dispatch(app, AppAction::OpenModal(make(id)));
        }
    };

    let delete_confirmed = Callback::new(move |()| {
        confirm_delete.set(false);
        let Some(id) = current_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_objects::delete_object(id).await {
                    Ok(()) => {
                        show_toast(toasts, ToastKind::Success, "Objekt borttaget");
                        history.update(|h| {
                            h.remove(id);
                            h.persist();
                        });
                        dispatch(app, AppAction::ObjectDeleted(id));
                    }
                    Err(e) => {
                        log::error!("delete object {id} failed: {e}");
                        show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte ta bort objekt"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let title = move || {
        object.with(|o| {
            o.as_ref().map(|o| app.with(|s| resolve_object_display_name(o, &s.display_fields))).unwrap_or_default()
        })
    };

    let header = move || {
        let obj = object.get()?;
        if layout == PanelLayout::Side {
            let subtitle = format!(
                "{} • {}",
                obj.auto_id.clone().unwrap_or_default(),
                if obj.type_name().is_empty() { "Objekt" } else { obj.type_name() }
            );
            return Some(
                view! {
                    <div class="side-panel-header">
                        <div>
                            <h3>{title}</h3>
                            <p class="side-panel-subtitle">{subtitle}</p>
                        </div>
                        <button class="btn btn--small close-panel-btn" on:click=move |_| dispatch(app, AppAction::CloseObject)>
                            "✕"
                        </button>
                    </div>
                }
                .into_any(),
            );
        }
        let color = app.with(|s| s.type_color(obj.type_name()));
        let rows = header_rows(&obj)
            .into_iter()
            .map(|row| {
                let items = row
                    .into_iter()
                    .map(|item| {
                        let value = if item.label == "TYP" {
                            let style = format!("background-color: {color}");
                            view! { <span class="type-badge" style=style>{item.value}</span> }.into_any()
                        } else {
                            view! { <strong>{item.value}</strong> }.into_any()
                        };
                        view! {
                            <div class="detail-header-item">
                                <span class="detail-label">{item.label}</span>
                                <span class="detail-value">{value}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>();
                view! { <div class="detail-list-header">{items}</div> }
            })
            .collect::<Vec<_>>();
        Some(view! { <div class="detail-list-headers">{rows}</div> }.into_any())
    };

    let details = move || {
        object.with(|o| {
            let Some(obj) = o else {
                return view! { <p class="empty-state">"Laddar..."</p> }.into_any();
            };
            let entries = detail_entries(obj, layout);
            if entries.is_empty() {
                return view! { <p class="empty-state">{EMPTY_DATA_TEXT}</p> }.into_any();
            }
            entries
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="detail-item">
                            <span class="detail-label">{label}</span>
                            <span class="detail-value">{value}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        })
    };

    let tabs = move || {
        DetailTab::ALL
            .into_iter()
            .map(|tab| {
                let class = move || if detail.with(|d| d.tab == tab) { "tab-btn active" } else { "tab-btn" };
                view! { <button class=class on:click=move |_| switch_tab(tab)>{tab.label()}</button> }
            })
            .collect::<Vec<_>>()
    };

    let content = move || {
        let Some(id) = current_id.get() else {
            return ().into_any();
        };
        match detail.with(|d| d.tab) {
            DetailTab::Details => view! { <div class="detail-list">{details}</div> }.into_any(),
            DetailTab::Relations => view! {
                <RelationManager object_id=id relations=relations on_changed=reload_relations />
            }
            .into_any(),
            DetailTab::Documents => view! {
                <FileUpload object_id=id documents=documents on_changed=reload_documents />
            }
            .into_any(),
        }
    };

    let (panel_class, tabs_class, content_class) = match layout {
        PanelLayout::Side => ("side-panel", "side-panel-tabs", "side-panel-content"),
        PanelLayout::Detail => ("detail-panel active", "tabs", "panel-content"),
    };

    view! {
        <Show when=move || current_id.get().is_some()>
            <aside class=panel_class>
                <div class="detail-panel-toolbar">
                    <button class="btn btn--small" title="Bakåt" disabled=move || !history.with(DetailHistory::can_go_back) on:click=go_back>
                        "←"
                    </button>
                    <button class="btn btn--small" title="Framåt" disabled=move || !history.with(DetailHistory::can_go_forward) on:click=go_forward>
                        "→"
                    </button>
                    <Show when=move || layout == PanelLayout::Detail>
                        <h2 class="detail-panel-title">{title}</h2>
                    </Show>
                    <div class="detail-panel-actions">
                        <button class="btn btn--small" on:click=move |_| open_modal(Modal::EditObject)>"Redigera"</button>
                        <button class="btn btn--small" on:click=move |_| open_modal(Modal::DuplicateObject)>"Duplicera"</button>
                        <button class="btn btn--small btn--danger" on:click=move |_| confirm_delete.set(true)>"Ta bort"</button>
                        <Show when=move || layout == PanelLayout::Detail>
                            <button class="btn btn--small" title="Stäng" on:click=move |_| dispatch(app, AppAction::CloseObject)>"✕"</button>
                        </Show>
                    </div>
                </div>
                {header}
                <div class=tabs_class>{tabs}</div>
                <div class=content_class>{content}</div>
            </aside>
        </Show>
        <Show when=move || confirm_delete.get()>
            <ConfirmDialog
                message="Är du säker på att du vill ta bort detta objekt?"
                on_confirm=delete_confirmed
                on_cancel=Callback::new(move |()| confirm_delete.set(false))
            />
        </Show>
    }
}
