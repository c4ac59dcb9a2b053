//! Generic searchable, sortable table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Objects, products and components all render through this widget. The
//! filter/sort model lives in [`TableState`]; this component owns one
//! instance per table and renders the header, search row and body.
//!
//! Search inputs are uncontrolled: the header only re-renders when the column
//! set changes, so typing never loses focus to a body refresh.

use leptos::prelude::*;

use crate::state::app::AppState;
use crate::state::table::{ColumnDef, DEFAULT_EMPTY_TEXT, SEARCH_DEBOUNCE_MS, TableRow, TableState, highlight_segments};
use crate::util::debounce::{Debounce, debounce};

/// Split `text` into plain and `<mark>` runs for `terms`.
pub fn highlighted(text: &str, terms: &[String], mark_class: &'static str) -> Vec<AnyView> {
    highlight_segments(text, terms)
        .into_iter()
        .map(|(segment, hit)| {
            if hit {
                view! { <mark class=mark_class>{segment}</mark> }.into_any()
            } else {
                segment.into_any()
            }
        })
        .collect()
}

#[component]
pub fn SystemTable<R>(
    #[prop(into)] rows: Signal<Vec<R>>,
    #[prop(into)] columns: Signal<Vec<ColumnDef>>,
    #[prop(optional)] on_row_click: Option<Callback<R>>,
    #[prop(optional, into)] empty_text: Option<String>,
    /// Highlight the row for which this returns true.
    #[prop(optional, into)]
    is_active: Option<Callback<R, bool>>,
) -> impl IntoView
where
    R: TableRow + Clone + Send + Sync + 'static,
{
    let app = expect_context::<RwSignal<AppState>>();
    let table = RwSignal::new(TableState::new(columns.get_untracked()));
    let search_debounce = RwSignal::new(Debounce::default());
    let empty_text = empty_text.unwrap_or_else(|| DEFAULT_EMPTY_TEXT.to_owned());

    Effect::new(move || {
        let next = columns.get();
        table.update(|t| t.set_columns(next));
    });

    let on_global_search = move |ev: leptos::ev::Event| {
        let term = event_target_value(&ev);
        debounce(search_debounce, SEARCH_DEBOUNCE_MS, move || table.update(|t| t.set_search(term)));
    };

    let header = move || {
        columns
            .get()
            .into_iter()
            .map(|column| {
                let key = column.key.clone();
                let sort_key = key.clone();
                let sortable = column.sortable;
                let class = format!(
                    "{}{}",
                    column.class.clone().unwrap_or_default(),
                    if sortable { " sortable" } else { "" }
                );
                view! {
                    <th class=class on:click=move |_| table.update(|t| t.toggle_sort(&sort_key))>
                        {column.label.clone()}
                        <Show when=move || sortable>
                            <span class="sort-indicator">
                                {
                                    let key = key.clone();
                                    move || table.with(|t| t.sort_indicator(&key))
                                }
                            </span>
                        </Show>
                    </th>
                }
            })
            .collect::<Vec<_>>()
    };

    let search_row = move || {
        columns
            .get()
            .into_iter()
            .map(|column| {
                if !column.searchable {
                    return view! { <th></th> }.into_any();
                }
                let key = column.key.clone();
                let initial = table.with_untracked(|t| t.column_search(&key).to_owned());
                let column_debounce = RwSignal::new(Debounce::default());
                let placeholder = format!("Sök {}...", column.label.to_lowercase());
                view! {
                    <th>
                        <input
                            type="text"
                            class="column-search-input"
                            placeholder=placeholder
                            value=initial
                            on:input=move |ev| {
                                let term = event_target_value(&ev);
                                let key = key.clone();
                                debounce(
                                    column_debounce,
                                    SEARCH_DEBOUNCE_MS,
                                    move || table.update(|t| t.set_column_search(&key, term)),
                                );
                            }
                        />
                    </th>
                }
                .into_any()
            })
            .collect::<Vec<_>>()
    };

    let body = move || {
        let state = table.get();
        let visible: Vec<R> = rows.with(|rows| state.filtered_rows(rows).into_iter().cloned().collect());
        if visible.is_empty() {
            let span = state.columns.len().max(1).to_string();
            return view! {
                <tr class="empty-row">
                    <td colspan=span>{empty_text.clone()}</td>
                </tr>
            }
            .into_any();
        }
        let app_state = app.get();
        visible
            .into_iter()
            .map(|row| {
                let cells = state
                    .columns
                    .iter()
                    .map(|column| {
                        let text = row.cell_display(&column.key);
                        let terms = state.active_search_terms(&column.key);
                        let class = column.class.clone().unwrap_or_default();
                        if column.type_badge && !text.is_empty() {
                            let style = format!("background-color: {}", app_state.type_color(&text));
                            view! {
                                <td class=class>
                                    <span class="type-badge" style=style>{highlighted(&text, &terms, "search-highlight")}</span>
                                </td>
                            }
                            .into_any()
                        } else {
                            view! { <td class=class>{highlighted(&text, &terms, "search-highlight")}</td> }.into_any()
                        }
                    })
                    .collect::<Vec<_>>();
                let active = is_active.is_some_and(|f| f.run(row.clone()));
                let clickable = on_row_click.is_some();
                let row_class = match (clickable, active) {
                    (true, true) => "clickable active",
                    (true, false) => "clickable",
                    (false, true) => "active",
                    (false, false) => "",
                };
                view! {
                    <tr
                        class=row_class
                        on:click=move |_| {
                            if let Some(cb) = on_row_click {
                                cb.run(row.clone());
                            }
                        }
                    >
                        {cells}
                    </tr>
                }
                .into_any()
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="system-table">
            <div class="table-search">
                <input type="search" class="search-input" placeholder="Sök..." on:input=on_global_search />
            </div>
            <div class="table-scroll">
                <table class="data-table">
                    <thead>
                        <tr>{header}</tr>
                        <tr class="column-search-row">{search_row}</tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        </div>
    }
}
