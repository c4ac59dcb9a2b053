//! Hierarchical object table for the tree mode of the objects page.
//!
//! Rows come from [`TreeState::visible_rows`]; this component only renders
//! them. Clicking a row with children toggles it; the id link opens the
//! object in the side panel.

use leptos::prelude::*;

use crate::components::system_table::highlighted;
use crate::net::api_objects::document_download_url;
use crate::net::types::TreeFile;
use crate::state::app::{AppAction, AppState, dispatch};
use crate::state::tree::{TREE_EMPTY_TEXT, TREE_SEARCH_DEBOUNCE_MS, TreeColumn, TreeRow, TreeState};
use crate::state::ui::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::ui::{ToastKind, show_toast};
use crate::util::debounce::{Debounce, debounce};
use crate::util::format::{is_pdf, pdf_open_url};

const MARK_CLASS: &str = "tree-search-hit";

fn search_terms(state: &TreeState, column: TreeColumn) -> Vec<String> {
    let term = state.search(column).trim().to_lowercase();
    if term.is_empty() { Vec::new() } else { vec![term] }
}

fn file_url(file: &TreeFile) -> String {
    let raw = document_download_url(file.id, false);
    let name = file.original_filename.as_deref().or(file.filename.as_deref()).unwrap_or_default();
    if is_pdf(file.mime_type.as_deref(), name) { pdf_open_url(&raw) } else { raw }
}

fn render_row(row: TreeRow, state: &TreeState, tree: RwSignal<TreeState>, app: RwSignal<AppState>) -> impl IntoView {
    let node = row.node.clone();
    let node_id = node.id.clone();
    let has_children = row.has_children();
    let indent = format!("padding-left: {}px", row.indent_px());
    let terms = |column| search_terms(state, column);

    let mut class = String::from("tree-node");
    if node.is_group() {
        class.push_str(" tree-node-group");
    }
    if has_children {
        class.push_str(" has-children");
    }
    let selected = state.is_selected(&node);
    if selected {
        class.push_str(" tree-node-selected");
    }
    let aria_selected = if selected { "true" } else { "false" };

    let toggle = has_children.then(|| {
        let toggle_class = if row.expanded { "tree-toggle expanded" } else { "tree-toggle" };
        view! { <span class=toggle_class>"▶"</span> }
    });
    let spacer = (!has_children).then(|| view! { <span class="tree-spacer"></span> });

    let name = highlighted(&node.name, &terms(TreeColumn::Name), MARK_CLASS);
    let count = node.is_group().then(|| view! { <span class="tree-count">{format!(" ({})", row.child_count)}</span> });

    let id_cell = match (node.object_id(), node.auto_id.clone()) {
        (Some(object_id), Some(auto_id)) => {
            let label = highlighted(&auto_id, &terms(TreeColumn::Id), MARK_CLASS);
            Some(view! {
                <a
                    href="#"
                    class="tree-id-link"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        tree.update(|t| t.select(Some(object_id)));
                        dispatch(app, AppAction::OpenObject(object_id));
                    }
                >
                    {label}
                </a>
            })
        }
        _ => None,
    };

    let text_cell = |column: TreeColumn| highlighted(&column.value(&node), &terms(column), MARK_CLASS);
    let kind = text_cell(TreeColumn::Type);
    let kravtext = text_cell(TreeColumn::Kravtext);
    let beskrivning = text_cell(TreeColumn::Beskrivning);

    let paperclip = (!node.files.is_empty()).then(|| {
        let title = format!("{} fil(er) kopplade", node.files.len());
        view! { <span title=title>"📎"</span> }
    });
    let file_terms = terms(TreeColumn::Files);
    let files = node
        .files
        .iter()
        .map(|file| {
            let label = file.label().to_owned();
            let title = format!("Öppna {label}");
            view! {
                <a
                    href=file_url(file)
                    class="tree-file-link"
                    title=title
                    target="_blank"
                    rel="noopener noreferrer"
                    on:click=move |ev| ev.stop_propagation()
                >
                    {highlighted(&label, &file_terms, MARK_CLASS)}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <tr
            class=class
            aria-selected=aria_selected
            on:click=move |_| {
                if has_children {
                    tree.update(|t| t.toggle(&node_id));
                }
            }
        >
            <td class="tree-cell-name" style=indent>
                {toggle}
                {spacer}
                <span class="tree-label">{name}{count}</span>
            </td>
            <td class="col-id">{id_cell}</td>
            <td>{kind}</td>
            <td class="col-text">{kravtext}</td>
            <td class="col-text">{beskrivning}</td>
            <td class="col-paperclip">{paperclip}</td>
            <td class="tree-files">{files}</td>
        </tr>
    }
}

#[component]
pub fn TreeView() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let tree = RwSignal::new(TreeState::default());
    let loaded = RwSignal::new(false);

    let data_version = Memo::new(move |_| app.with(|s| s.data_version));
    Effect::new(move || {
        let _ = data_version.get();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_objects::object_tree().await {
                    Ok(nodes) => tree.update(|t| t.set_nodes(nodes)),
                    Err(e) => {
                        log::error!("load object tree failed: {e}");
                        show_toast(toasts, ToastKind::Error, "Kunde inte ladda objekt");
                    }
                }
                loaded.set(true);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = toasts;
            loaded.set(true);
        }
    });

    // Keep the highlighted row in step with the side panel.
    Effect::new(move || {
        let current = app.with(|s| s.current_object_id);
        tree.update(|t| t.select(current));
    });

    let search_inputs = TreeColumn::ALL
        .into_iter()
        .map(|column| {
            let state = RwSignal::new(Debounce::default());
            let input = view! {
                <th>
                    <input
                        type="text"
                        class="tree-column-search-input"
                        placeholder="Sök..."
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            debounce(state, TREE_SEARCH_DEBOUNCE_MS, move || tree.update(|t| t.set_search(column, term)));
                        }
                    />
                </th>
            };
            if column == TreeColumn::Files {
                view! { <th class="col-paperclip"></th> {input} }.into_any()
            } else {
                input.into_any()
            }
        })
        .collect::<Vec<_>>();

    let body = move || {
        if !loaded.get() {
            return view! {
                <tr class="empty-row">
                    <td colspan="7">"Laddar..."</td>
                </tr>
            }
            .into_any();
        }
        let state = tree.get();
        let rows = state.visible_rows();
        if rows.is_empty() {
            let text = if state.has_active_search() { "Inga träffar" } else { TREE_EMPTY_TEXT };
            return view! {
                <tr class="empty-row">
                    <td colspan="7">{text}</td>
                </tr>
            }
            .into_any();
        }
        rows.into_iter().map(|row| render_row(row, &state, tree, app)).collect::<Vec<_>>().into_any()
    };

    view! {
        <div class="tree-view">
            <table class="tree-table">
                <thead>
                    <tr>
                        {TreeColumn::ALL
                            .into_iter()
                            .map(|column| {
                                if column == TreeColumn::Files {
                                    view! { <th class="col-paperclip">"📎"</th> <th>{column.label()}</th> }.into_any()
                                } else {
                                    view! { <th>{column.label()}</th> }.into_any()
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tr>
                    <tr class="tree-search-row">{search_inputs}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
