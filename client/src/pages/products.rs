//! Products page: product register, bills of materials, product relations
//! and the component catalogue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Products and components are separate from the object model and have
//! their own endpoints. The page keeps its own reload counters instead of
//! `AppState::data_version`, which only tracks objects.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::system_table::SystemTable;
use crate::net::types::{BomItem, Component, Product, ProductRelations};
use crate::state::app::{AppAction, AppState, View, dispatch};
use crate::state::products::{
    BOM_EMPTY_TEXT, BomDraft, ComponentDraft, PRODUCT_SEARCH_DEBOUNCE_MS, PRODUCT_STATUSES, PRODUCTS_EMPTY_TEXT,
    ProductDraft, ProductRelationDraft, bom_cells, component_columns, component_option_label, product_columns,
    product_option_label, related_product,
};
use crate::state::ui::{ToastKind, ToastState, show_toast};
use crate::util::debounce::{Debounce, debounce};
use crate::util::format::{RELATION_TYPES, format_datetime, relation_type_label, status_class};

pub const COMPONENTS_EMPTY_TEXT: &str = "Inga komponenter hittades";
pub const PRODUCT_RELATIONS_EMPTY_TEXT: &str = "Inga relationer definierade";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductsTab {
    #[default]
    Products,
    Components,
}

impl ProductsTab {
    pub const ALL: [ProductsTab; 2] = [ProductsTab::Products, ProductsTab::Components];

    pub fn label(self) -> &'static str {
        match self {
            Self::Products => "Produkter",
            Self::Components => "Komponenter",
        }
    }
}

/// Something waiting for a delete confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingDelete {
    Product(i64),
    Component(i64),
    BomItem(i64),
    Relation(i64),
}

impl PendingDelete {
    pub fn confirm_message(self) -> &'static str {
        match self {
            Self::Product(_) => "Är du säker på att du vill ta bort denna produkt?",
            Self::Component(_) => "Är du säker på att du vill ta bort denna komponent?",
            Self::BomItem(_) => "Ta bort denna komponent från BOM?",
            Self::Relation(_) => "Är du säker på att du vill ta bort denna relation?",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Product(_) => "Produkt borttagen",
            Self::Component(_) => "Komponent borttagen",
            Self::BomItem(_) => "Komponent borttagen från BOM",
            Self::Relation(_) => "Relation borttagen",
        }
    }
}

/// Status filter value: empty means every status.
pub fn status_filter(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

/// One line in a product's relation list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationLine {
    pub id: i64,
    pub text: String,
    pub description: Option<String>,
}

/// Relation lines seen from `product_id`: outgoing relations read
/// "Består av X", incoming ones "X består av denna produkt".
pub fn relation_lines(relations: &ProductRelations, product_id: i64) -> Vec<RelationLine> {
    let name_of = |product: Option<&Product>| product.map_or_else(|| "Okänd produkt".to_owned(), |p| p.name.clone());
    let outgoing = relations.as_parent.iter().map(|rel| RelationLine {
        id: rel.id,
        text: format!("{} {}", relation_type_label(&rel.relation_type), name_of(related_product(rel, product_id))),
        description: rel.description.clone().filter(|d| !d.trim().is_empty()),
    });
    let incoming = relations.as_child.iter().map(|rel| RelationLine {
        id: rel.id,
        text: format!(
            "{} {} denna produkt",
            name_of(related_product(rel, product_id)),
            relation_type_label(&rel.relation_type).to_lowercase()
        ),
        description: rel.description.clone().filter(|d| !d.trim().is_empty()),
    });
    outgoing.chain(incoming).collect()
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    Effect::new(move || dispatch(app, AppAction::SwitchView(View::Products)));

    let tab = RwSignal::new(ProductsTab::default());
    let pending_delete = RwSignal::new(None::<PendingDelete>);
    let products_version = RwSignal::new(0_u64);
    let components_version = RwSignal::new(0_u64);
    let detail_version = RwSignal::new(0_u64);
    let open_product = RwSignal::new(None::<i64>);

    let delete_confirmed = Callback::new(move |()| {
        let Some(target) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                use crate::net::api_products;

                let result = match target {
                    PendingDelete::Product(id) => api_products::delete_product(id).await,
                    PendingDelete::Component(id) => api_products::delete_component(id).await,
                    PendingDelete::BomItem(id) => api_products::delete_bom_item(id).await,
                    PendingDelete::Relation(id) => api_products::delete_product_relation(id).await,
                };
                match result {
                    Ok(()) => {
                        show_toast(toasts, ToastKind::Success, target.success_message());
                        match target {
                            PendingDelete::Product(id) => {
                                if open_product.get_untracked() == Some(id) {
                                    open_product.set(None);
                                }
                                products_version.update(|v| *v += 1);
                            }
                            PendingDelete::Component(_) => components_version.update(|v| *v += 1),
                            PendingDelete::BomItem(_) | PendingDelete::Relation(_) => {
                                detail_version.update(|v| *v += 1);
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("delete {target:?} failed: {e}");
                        show_toast(toasts, ToastKind::Error, format!("Fel vid borttagning: {}", e.user_message("okänt fel")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, toasts, products_version, components_version, detail_version);
        }
    });

    let tabs = move || {
        ProductsTab::ALL
            .into_iter()
            .map(|t| {
                let class = move || if tab.get() == t { "tab-btn active" } else { "tab-btn" };
                view! { <button class=class on:click=move |_| tab.set(t)>{t.label()}</button> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="products-page">
            <div class="tabs">{tabs}</div>
            <Show
                when=move || tab.get() == ProductsTab::Products
                fallback=move || {
                    view! { <ComponentsTab version=components_version pending_delete=pending_delete /> }
                }
            >
                <Show
                    when=move || open_product.get().is_some()
                    fallback=move || {
                        view! {
                            <ProductList version=products_version open_product=open_product />
                        }
                    }
                >
                    {move || {
                        open_product
                            .get()
                            .map(|id| {
                                view! {
                                    <ProductDetail
                                        product_id=id
                                        version=detail_version
                                        products_version=products_version
                                        open_product=open_product
                                        pending_delete=pending_delete
                                    />
                                }
                            })
                    }}
                </Show>
            </Show>
            {move || {
                pending_delete
                    .get()
                    .map(|target| {
                        view! {
                            <ConfirmDialog
                                message=target.confirm_message()
                                on_confirm=delete_confirmed
                                on_cancel=Callback::new(move |()| pending_delete.set(None))
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ProductList(version: RwSignal<u64>, open_product: RwSignal<Option<i64>>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let products = RwSignal::new(Vec::<Product>::new());
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);
    let search_debounce = RwSignal::new(Debounce::default());
    let editor = RwSignal::new(None::<ProductDraft>);

    Effect::new(move || {
        let _ = version.get();
        let term = search.get();
        let status = status.get();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let term = Some(term.trim()).filter(|t| !t.is_empty());
                match crate::net::api_products::list_products(term, status.as_deref()).await {
                    Ok(list) => products.set(list),
                    Err(e) => {
                        log::error!("load products failed: {e}");
                        show_toast(
                            toasts,
                            ToastKind::Error,
                            format!("Fel vid laddning av produkter: {}", e.user_message("okänt fel")),
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (term, status, toasts);
        }
    });

    let on_search = move |ev: leptos::ev::Event| {
        let term = event_target_value(&ev);
        debounce(search_debounce, PRODUCT_SEARCH_DEBOUNCE_MS, move || search.set(term));
    };
    let status_options = PRODUCT_STATUSES
        .into_iter()
        .map(|s| view! { <option value=s>{s}</option> })
        .collect::<Vec<_>>();
    let open_row = Callback::new(move |product: Product| open_product.set(Some(product.id)));

    view! {
        <div class="products-list">
            <div class="view-header">
                <h2>"Produkter"</h2>
                <button class="btn btn--primary" on:click=move |_| editor.set(Some(ProductDraft::default()))>
                    "Skapa Produkt"
                </button>
            </div>
            <div class="filters">
                <input type="search" class="form-control" placeholder="Sök produkter..." on:input=on_search />
                <select on:change=move |ev| status.set(status_filter(&event_target_value(&ev)))>
                    <option value="">"Alla statusar"</option>
                    {status_options}
                </select>
            </div>
            <SystemTable
                rows=products
                columns=Signal::derive(product_columns)
                on_row_click=open_row
                empty_text=PRODUCTS_EMPTY_TEXT
            />
            <p class="table-hint">"Klicka på en produkt för att se BOM och relationer."</p>
            <ProductModal editor=editor version=version />
        </div>
    }
}

#[component]
fn ProductModal(editor: RwSignal<Option<ProductDraft>>, version: RwSignal<u64>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let close = move || editor.set(None);
    let draft = Memo::new(move |_| editor.get().unwrap_or_default());

    let edit = move |f: fn(&mut ProductDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            editor.update(|d| {
                if let Some(d) = d {
                    f(d, value);
                }
            });
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = editor.get_untracked() else {
            return;
        };
        let product = match current.to_product() {
            Ok(product) => product,
            Err(error) => {
                show_toast(toasts, ToastKind::Error, error.to_string());
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                use crate::net::api_products;

                let result = if current.id.is_some() {
                    api_products::update_product(&product).await.map(|_| "Produkt uppdaterad")
                } else {
                    api_products::create_product(&product).await.map(|_| "Produkt skapad")
                };
                match result {
                    Ok(message) => {
                        show_toast(toasts, ToastKind::Success, message);
                        editor.set(None);
                        version.update(|v| *v += 1);
                    }
                    Err(e) => {
                        log::error!("save product failed: {e}");
                        show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte spara produkt"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product, version);
        }
    };

    let status_options = move || {
        PRODUCT_STATUSES.into_iter().map(|s| view! { <option value=s>{s}</option> }).collect::<Vec<_>>()
    };

    view! {
        <Show when=move || editor.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>{move || if draft.get().id.is_some() { "Redigera Produkt" } else { "Skapa Produkt" }}</h2>
                        <button class="btn btn--icon" title="Stäng" on:click=move |_| close()>"×"</button>
                    </div>
                    <form on:submit=on_save>
                        <div class="form-group">
                            <label for="product-name">"Namn *"</label>
                            <input
                                id="product-name"
                                type="text"
                                prop:value=move || draft.get().name
                                on:input=edit(|d, v| d.name = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="product-article-number">"Artikelnummer *"</label>
                            <input
                                id="product-article-number"
                                type="text"
                                prop:value=move || draft.get().article_number
                                on:input=edit(|d, v| d.article_number = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="product-version">"Version"</label>
                            <input
                                id="product-version"
                                type="text"
                                prop:value=move || draft.get().version
                                on:input=edit(|d, v| d.version = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="product-status">"Status"</label>
                            <select
                                id="product-status"
                                prop:value=move || draft.get().status
                                on:change=edit(|d, v| d.status = v)
                            >
                                {status_options}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="product-description">"Beskrivning"</label>
                            <textarea
                                id="product-description"
                                rows="3"
                                prop:value=move || draft.get().description
                                on:input=edit(|d, v| d.description = v)
                            />
                        </div>
                        <div class="dialog__actions">
                            <button type="button" class="btn" on:click=move |_| close()>"Avbryt"</button>
                            <button type="submit" class="btn btn--primary">"Spara"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ProductDetail(
    product_id: i64,
    version: RwSignal<u64>,
    products_version: RwSignal<u64>,
    open_product: RwSignal<Option<i64>>,
    pending_delete: RwSignal<Option<PendingDelete>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let product = RwSignal::new(None::<Product>);
    let bom = RwSignal::new(Vec::<BomItem>::new());
    let relations = RwSignal::new(ProductRelations::default());
    let editor = RwSignal::new(None::<ProductDraft>);
    let bom_editor = RwSignal::new(None::<BomDraft>);
    let relation_editor = RwSignal::new(None::<ProductRelationDraft>);

    // A saved edit bumps the list counter; refresh the header as well.
    Effect::new(move || {
        let _ = (version.get(), products_version.get());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                use crate::net::api_products;

                match api_products::get_product(product_id).await {
                    Ok(p) => product.set(Some(p)),
                    Err(e) => {
                        log::error!("load product {product_id} failed: {e}");
                        show_toast(
                            toasts,
                            ToastKind::Error,
                            format!("Fel vid laddning av produkt: {}", e.user_message("okänt fel")),
                        );
                        open_product.set(None);
                        return;
                    }
                }
                match api_products::list_bom(product_id).await {
                    Ok(items) => bom.set(items),
                    Err(e) => {
                        log::error!("load bom for {product_id} failed: {e}");
                        show_toast(
                            toasts,
                            ToastKind::Error,
                            format!("Fel vid laddning av BOM: {}", e.user_message("okänt fel")),
                        );
                    }
                }
                match api_products::list_product_relations(product_id).await {
                    Ok(list) => relations.set(list),
                    Err(e) => {
                        log::error!("load product relations for {product_id} failed: {e}");
                        show_toast(
                            toasts,
                            ToastKind::Error,
                            format!("Fel vid laddning av relationer: {}", e.user_message("okänt fel")),
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (toasts, product_id);
        }
    });

    let info = move || {
        product.get().map(|p| {
            let status = p.status.clone().unwrap_or_default();
            let badge = format!("status-badge {}", status_class(&status));
            let rows = [
                ("Artikelnummer", p.article_number.clone().unwrap_or_else(|| "-".to_owned())),
                ("Namn", p.name.clone()),
                ("Version", p.version.clone().unwrap_or_else(|| "-".to_owned())),
                ("Beskrivning", p.description.clone().filter(|d| !d.trim().is_empty()).unwrap_or_else(|| "-".to_owned())),
                ("Skapad", format_datetime(p.created_at.as_deref())),
                ("Uppdaterad", format_datetime(p.updated_at.as_deref())),
            ];
            view! {
                <div class="detail-grid">
                    {rows
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="detail-item">
                                    <span class="detail-label">{label}</span>
                                    <span class="detail-value">{value}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <div class="detail-item">
                        <span class="detail-label">"Status"</span>
                        <span class="detail-value">
                            <span class=badge>{status}</span>
                        </span>
                    </div>
                </div>
            }
        })
    };

    let bom_rows = move || {
        let items = bom.get();
        if items.is_empty() {
            return view! {
                <tr>
                    <td colspan="7" class="empty-state">{BOM_EMPTY_TEXT}</td>
                </tr>
            }
            .into_any();
        }
        items
            .into_iter()
            .map(|item| {
                let id = item.id;
                let cells = bom_cells(&item).into_iter().map(|c| view! { <td>{c}</td> }).collect::<Vec<_>>();
                view! {
                    <tr>
                        {cells}
                        <td>
                            <button
                                class="btn btn--small btn--danger"
                                on:click=move |_| pending_delete.set(Some(PendingDelete::BomItem(id)))
                            >
                                "Ta bort"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    let relation_rows = move || {
        let lines = relations.with(|r| relation_lines(r, product_id));
        if lines.is_empty() {
            return view! { <p class="empty-state">{PRODUCT_RELATIONS_EMPTY_TEXT}</p> }.into_any();
        }
        lines
            .into_iter()
            .map(|line| {
                let id = line.id;
                view! {
                    <div class="relation-item">
                        <div class="relation-info">
                            <strong>{line.text}</strong>
                            {line.description.map(|d| view! { <p>{d}</p> })}
                        </div>
                        <button
                            class="btn btn--small btn--danger"
                            on:click=move |_| pending_delete.set(Some(PendingDelete::Relation(id)))
                        >
                            "Ta bort"
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    let edit_current = move |_: leptos::ev::MouseEvent| {
        if let Some(p) = product.get_untracked() {
            editor.set(Some(ProductDraft::from_product(&p)));
        }
    };

    view! {
        <div class="product-detail">
            <div class="view-header">
                <button class="btn" on:click=move |_| open_product.set(None)>"← Tillbaka"</button>
                <h2>{move || product.get().map(|p| p.name).unwrap_or_default()}</h2>
                <div>
                    <button class="btn btn--primary" on:click=edit_current>"Redigera"</button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| pending_delete.set(Some(PendingDelete::Product(product_id)))
                    >
                        "Ta bort"
                    </button>
                </div>
            </div>
            <div class="detail-section">{info}</div>
            <div class="detail-section">
                <div class="section-header">
                    <h3>"Bill of Materials"</h3>
                    <button class="btn btn--small btn--primary" on:click=move |_| bom_editor.set(Some(BomDraft::default()))>
                        "Lägg till komponent"
                    </button>
                </div>
                <table class="data-table bom-table">
                    <thead>
                        <tr>
                            <th>"Pos"</th>
                            <th>"Komponent"</th>
                            <th>"Typ"</th>
                            <th>"Antal"</th>
                            <th>"Enhet"</th>
                            <th>"Anteckningar"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{bom_rows}</tbody>
                </table>
            </div>
            <div class="detail-section">
                <div class="section-header">
                    <h3>"Relationer"</h3>
                    <button
                        class="btn btn--small btn--primary"
                        on:click=move |_| relation_editor.set(Some(ProductRelationDraft::default()))
                    >
                        "Lägg till relation"
                    </button>
                </div>
                <div class="relations-container">{relation_rows}</div>
            </div>
            <ProductModal editor=editor version=products_version />
            <BomModal product_id=product_id editor=bom_editor version=version />
            <ProductRelationModal product_id=product_id editor=relation_editor version=version />
        </div>
    }
}

#[component]
fn BomModal(product_id: i64, editor: RwSignal<Option<BomDraft>>, version: RwSignal<u64>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let components = RwSignal::new(Vec::<Component>::new());
    let close = move || editor.set(None);
    let is_open = Memo::new(move |_| editor.with(Option::is_some));

    Effect::new(move || {
        if !is_open.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_products::list_components().await {
                    Ok(list) => components.set(list),
                    Err(e) => {
                        log::error!("load components failed: {e}");
                        show_toast(
                            toasts,
                            ToastKind::Error,
                            format!("Fel vid laddning av komponenter: {}", e.user_message("okänt fel")),
                        );
                        editor.set(None);
                    }
                }
            });
        }
    });

    let edit = move |f: fn(&mut BomDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            editor.update(|d| {
                if let Some(d) = d {
                    f(d, value);
                }
            });
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = editor.get_untracked() else {
            return;
        };
        let payload = match draft.to_payload() {
            Ok(payload) => payload,
            Err(error) => {
                show_toast(toasts, ToastKind::Error, error.to_string());
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_products::add_bom_item(product_id, &payload).await {
                    Ok(_) => {
                        show_toast(toasts, ToastKind::Success, "Komponent tillagd i BOM");
                        editor.set(None);
                        version.update(|v| *v += 1);
                    }
                    Err(e) => {
                        log::error!("add bom item failed: {e}");
                        show_toast(toasts, ToastKind::Error, format!("Fel: {}", e.user_message("okänt fel")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, product_id, version, toasts);
        }
    };

    let draft = Memo::new(move |_| editor.get().unwrap_or_default());
    let component_options = move || {
        components
            .get()
            .into_iter()
            .map(|c| view! { <option value=c.id.to_string()>{component_option_label(&c)}</option> })
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>"Lägg till komponent i BOM"</h2>
                        <button class="btn btn--icon" title="Stäng" on:click=move |_| close()>"×"</button>
                    </div>
                    <form on:submit=on_save>
                        <div class="form-group">
                            <label for="bom-component">"Komponent *"</label>
                            <select
                                id="bom-component"
                                prop:value=move || draft.get().component_id.map(|id| id.to_string()).unwrap_or_default()
                                on:change=edit(|d, v| d.component_id = v.parse().ok())
                            >
                                <option value="">"Välj komponent..."</option>
                                {component_options}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="bom-quantity">"Antal *"</label>
                            <input
                                id="bom-quantity"
                                type="text"
                                inputmode="decimal"
                                prop:value=move || draft.get().quantity
                                on:input=edit(|d, v| d.quantity = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="bom-position">"Position"</label>
                            <input
                                id="bom-position"
                                type="number"
                                prop:value=move || draft.get().position
                                on:input=edit(|d, v| d.position = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="bom-notes">"Anteckningar"</label>
                            <textarea
                                id="bom-notes"
                                rows="2"
                                prop:value=move || draft.get().notes
                                on:input=edit(|d, v| d.notes = v)
                            />
                        </div>
                        <div class="dialog__actions">
                            <button type="button" class="btn" on:click=move |_| close()>"Avbryt"</button>
                            <button type="submit" class="btn btn--primary">"Lägg till"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ProductRelationModal(
    product_id: i64,
    editor: RwSignal<Option<ProductRelationDraft>>,
    version: RwSignal<u64>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let candidates = RwSignal::new(Vec::<Product>::new());
    let close = move || editor.set(None);
    let is_open = Memo::new(move |_| editor.with(Option::is_some));

    Effect::new(move || {
        if !is_open.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_products::list_products(None, None).await {
                    Ok(list) => candidates.set(list.into_iter().filter(|p| p.id != product_id).collect()),
                    Err(e) => {
                        log::error!("load relation candidates failed: {e}");
                        show_toast(
                            toasts,
                            ToastKind::Error,
                            format!("Fel vid laddning av produkter: {}", e.user_message("okänt fel")),
                        );
                        editor.set(None);
                    }
                }
            });
        }
    });

    let edit = move |f: fn(&mut ProductRelationDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            editor.update(|d| {
                if let Some(d) = d {
                    f(d, value);
                }
            });
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = editor.get_untracked() else {
            return;
        };
        let payload = match draft.to_payload() {
            Ok(payload) => payload,
            Err(error) => {
                show_toast(toasts, ToastKind::Error, error.to_string());
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_products::add_product_relation(product_id, &payload).await {
                    Ok(_) => {
                        show_toast(toasts, ToastKind::Success, "Relation skapad");
                        editor.set(None);
                        version.update(|v| *v += 1);
                    }
                    Err(e) => {
                        log::error!("add product relation failed: {e}");
                        show_toast(toasts, ToastKind::Error, format!("Fel: {}", e.user_message("okänt fel")));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, product_id, version, toasts);
        }
    };

    let draft = Memo::new(move |_| editor.get().unwrap_or_default());
    let product_options = move || {
        candidates
            .get()
            .into_iter()
            .map(|p| view! { <option value=p.id.to_string()>{product_option_label(&p)}</option> })
            .collect::<Vec<_>>()
    };
    let type_options = move || {
        RELATION_TYPES
            .into_iter()
            .map(|t| view! { <option value=t>{relation_type_label(t)}</option> })
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>"Lägg till relation"</h2>
                        <button class="btn btn--icon" title="Stäng" on:click=move |_| close()>"×"</button>
                    </div>
                    <form on:submit=on_save>
                        <div class="form-group">
                            <label for="relation-product">"Produkt *"</label>
                            <select
                                id="relation-product"
                                prop:value=move || {
                                    draft.get().child_product_id.map(|id| id.to_string()).unwrap_or_default()
                                }
                                on:change=edit(|d, v| d.child_product_id = v.parse().ok())
                            >
                                <option value="">"Välj produkt..."</option>
                                {product_options}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="relation-type">"Relationstyp"</label>
                            <select
                                id="relation-type"
                                prop:value=move || draft.get().relation_type
                                on:change=edit(|d, v| d.relation_type = v)
                            >
                                {type_options}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="relation-description">"Beskrivning"</label>
                            <textarea
                                id="relation-description"
                                rows="2"
                                prop:value=move || draft.get().description
                                on:input=edit(|d, v| d.description = v)
                            />
                        </div>
                        <div class="dialog__actions">
                            <button type="button" class="btn" on:click=move |_| close()>"Avbryt"</button>
                            <button type="submit" class="btn btn--primary">"Spara"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ComponentsTab(version: RwSignal<u64>, pending_delete: RwSignal<Option<PendingDelete>>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let components = RwSignal::new(Vec::<Component>::new());
    let editor = RwSignal::new(None::<ComponentDraft>);

    Effect::new(move || {
        let _ = version.get();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_products::list_components().await {
                    Ok(list) => components.set(list),
                    Err(e) => {
                        log::error!("load components failed: {e}");
                        show_toast(
                            toasts,
                            ToastKind::Error,
                            format!("Fel vid laddning av komponenter: {}", e.user_message("okänt fel")),
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (components, toasts);
        }
    });

    let selected = RwSignal::new(None::<Component>);
    let open_row = Callback::new(move |component: Component| selected.set(Some(component)));
    let is_active = Callback::new(move |component: Component| {
        selected.with_untracked(|s| s.as_ref().map(|s| s.id)) == Some(component.id)
    });

    let actions = move || {
        selected.get().map(|component| {
            let id = component.id;
            let draft = ComponentDraft::from_component(&component);
            view! {
                <div class="selection-actions">
                    <span>{component.name}</span>
                    <button class="btn btn--small" on:click=move |_| editor.set(Some(draft.clone()))>"Redigera"</button>
                    <button
                        class="btn btn--small btn--danger"
                        on:click=move |_| {
                            selected.set(None);
                            pending_delete.set(Some(PendingDelete::Component(id)));
                        }
                    >
                        "Ta bort"
                    </button>
                </div>
            }
        })
    };

    view! {
        <div class="components-list">
            <div class="view-header">
                <h2>"Komponenter"</h2>
                <button class="btn btn--primary" on:click=move |_| editor.set(Some(ComponentDraft::default()))>
                    "Skapa Komponent"
                </button>
            </div>
            {actions}
            <SystemTable
                rows=components
                columns=Signal::derive(component_columns)
                on_row_click=open_row
                is_active=is_active
                empty_text=COMPONENTS_EMPTY_TEXT
            />
            <ComponentModal editor=editor version=version />
        </div>
    }
}

#[component]
fn ComponentModal(editor: RwSignal<Option<ComponentDraft>>, version: RwSignal<u64>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let close = move || editor.set(None);
    let draft = Memo::new(move |_| editor.get().unwrap_or_default());

    let edit = move |f: fn(&mut ComponentDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            editor.update(|d| {
                if let Some(d) = d {
                    f(d, value);
                }
            });
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = editor.get_untracked() else {
            return;
        };
        let component = match current.to_component() {
            Ok(component) => component,
            Err(error) => {
                show_toast(toasts, ToastKind::Error, error.to_string());
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                use crate::net::api_products;

                let result = if current.id.is_some() {
                    api_products::update_component(&component).await.map(|_| "Komponent uppdaterad")
                } else {
                    api_products::create_component(&component).await.map(|_| "Komponent skapad")
                };
                match result {
                    Ok(message) => {
                        show_toast(toasts, ToastKind::Success, message);
                        editor.set(None);
                        version.update(|v| *v += 1);
                    }
                    Err(e) => {
                        log::error!("save component failed: {e}");
                        show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte spara komponent"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (component, version);
        }
    };

    view! {
        <Show when=move || editor.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>{move || if draft.get().id.is_some() { "Redigera Komponent" } else { "Skapa Komponent" }}</h2>
                        <button class="btn btn--icon" title="Stäng" on:click=move |_| close()>"×"</button>
                    </div>
                    <form on:submit=on_save>
                        <div class="form-group">
                            <label for="component-name">"Namn *"</label>
                            <input
                                id="component-name"
                                type="text"
                                prop:value=move || draft.get().name
                                on:input=edit(|d, v| d.name = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="component-type">"Typ"</label>
                            <input
                                id="component-type"
                                type="text"
                                prop:value=move || draft.get().kind
                                on:input=edit(|d, v| d.kind = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="component-specifications">"Specifikationer"</label>
                            <textarea
                                id="component-specifications"
                                rows="3"
                                prop:value=move || draft.get().specifications
                                on:input=edit(|d, v| d.specifications = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="component-unit">"Enhet"</label>
                            <input
                                id="component-unit"
                                type="text"
                                placeholder="st"
                                prop:value=move || draft.get().unit
                                on:input=edit(|d, v| d.unit = v)
                            />
                        </div>
                        <div class="dialog__actions">
                            <button type="button" class="btn" on:click=move |_| close()>"Avbryt"</button>
                            <button type="submit" class="btn btn--primary">"Spara"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
