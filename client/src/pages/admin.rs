//! Admin page: object types, their fields and building-part categories.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every type or field change refetches the type list and stores it through
//! [`AppAction::SetObjectTypes`], so forms and tables elsewhere see the new
//! schema without a reload. Categories are only used by select fields and
//! live in page-local state.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{BuildingPartCategory, ObjectField};
use crate::state::admin::{FIELD_TYPE_CHOICES, FieldDraft, TypeDraft, field_type_label, type_card_subtitle};
use crate::state::app::{AppAction, AppState, View, dispatch};
use crate::state::ui::{ToastKind, ToastState, show_toast};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    ObjectTypes,
    Categories,
}

impl AdminTab {
    pub const ALL: [AdminTab; 2] = [AdminTab::ObjectTypes, AdminTab::Categories];

    pub fn label(self) -> &'static str {
        match self {
            Self::ObjectTypes => "Objekttyper",
            Self::Categories => "Byggdelskategorier",
        }
    }
}

/// Something waiting for a delete confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingDelete {
    Type(i64),
    Field { type_id: i64, field_id: i64 },
    Category(i64),
}

impl PendingDelete {
    pub fn confirm_message(self) -> &'static str {
        match self {
            Self::Type(_) => "Är du säker på att du vill ta bort denna objekttyp? Detta kan påverka befintliga objekt.",
            Self::Field { .. } => "Är du säker på att du vill ta bort detta fält?",
            Self::Category(_) => "Är du säker på att du vill ta bort denna byggdelskategori?",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Type(_) => "Objekttyp borttagen",
            Self::Field { .. } => "Fält borttaget",
            Self::Category(_) => "Byggdelskategori borttagen",
        }
    }
}

/// Open type editor; `id` is `None` while creating.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeEditor {
    pub id: Option<i64>,
    pub draft: TypeDraft,
}

/// Open field editor for a field of `type_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEditor {
    pub type_id: i64,
    pub field_id: Option<i64>,
    pub draft: FieldDraft,
}

/// Visibility badge of a field row as `(class, label)`.
pub fn visibility_badge(field: &ObjectField) -> (&'static str, &'static str) {
    if field.table_visible() {
        ("status-badge godkand", "Visas i tabeller")
    } else {
        ("status-badge obsolete", "Dold i tabeller")
    }
}

/// Refetch the type list into the app state.
#[cfg(feature = "hydrate")]
async fn refresh_object_types(app: RwSignal<AppState>, toasts: RwSignal<ToastState>) {
    match crate::net::api_schema::list_object_types().await {
        Ok(types) => dispatch(app, AppAction::SetObjectTypes(types)),
        Err(e) => {
            log::error!("load object types failed: {e}");
            show_toast(toasts, ToastKind::Error, "Kunde inte ladda objekttyper");
        }
    }
}

#[cfg(feature = "hydrate")]
async fn refresh_categories(categories: RwSignal<Vec<BuildingPartCategory>>, toasts: RwSignal<ToastState>) {
    match crate::net::api_schema::list_categories().await {
        Ok(list) => categories.set(list),
        Err(e) => {
            log::error!("load categories failed: {e}");
            show_toast(toasts, ToastKind::Error, "Kunde inte ladda byggdelskategorier");
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    Effect::new(move || dispatch(app, AppAction::SwitchView(View::Admin)));

    let tab = RwSignal::new(AdminTab::default());
    let pending_delete = RwSignal::new(None::<PendingDelete>);
    let categories = RwSignal::new(Vec::<BuildingPartCategory>::new());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                refresh_object_types(app, toasts).await;
                refresh_categories(categories, toasts).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (categories, toasts);
        }
    });

    let delete_confirmed = Callback::new(move |()| {
        let Some(target) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                use crate::net::api_schema;

                let result = match target {
                    PendingDelete::Type(id) => api_schema::delete_object_type(id).await,
                    PendingDelete::Field { type_id, field_id } => api_schema::delete_field(type_id, field_id).await,
                    PendingDelete::Category(id) => api_schema::delete_category(id).await,
                };
                match result {
                    Ok(()) => {
                        show_toast(toasts, ToastKind::Success, target.success_message());
                        if let PendingDelete::Category(_) = target {
                            refresh_categories(categories, toasts).await;
                        } else {
                            refresh_object_types(app, toasts).await;
                        }
                    }
                    Err(e) => {
                        log::error!("delete {target:?} failed: {e}");
                        show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte ta bort"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    });

    let tabs = move || {
        AdminTab::ALL
            .into_iter()
            .map(|t| {
                let class = move || if tab.get() == t { "tab-btn active" } else { "tab-btn" };
                view! { <button class=class on:click=move |_| tab.set(t)>{t.label()}</button> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="admin-page">
            <h2>"Administration"</h2>
            <div class="tabs">{tabs}</div>
            <Show
                when=move || tab.get() == AdminTab::ObjectTypes
                fallback=move || view! { <CategoriesTab categories=categories pending_delete=pending_delete /> }
            >
                <ObjectTypesTab pending_delete=pending_delete />
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
fn ObjectTypesTab(pending_delete: RwSignal<Option<PendingDelete>>) -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let selected = RwSignal::new(None::<i64>);
    let type_editor = RwSignal::new(None::<TypeEditor>);
    let field_editor = RwSignal::new(None::<FieldEditor>);

    let types = Memo::new(move |_| app.with(|s| s.object_types.clone()));
    let selected_type = Memo::new(move |_| {
        let id = selected.get()?;
        types.with(|list| list.iter().find(|t| t.id == id).cloned())
    });

    let type_cards = move || {
        let list = types.get();
        if list.is_empty() {
            return view! { <p class="empty-state">"Inga objekttyper ännu"</p> }.into_any();
        }
        list.into_iter()
            .map(|t| {
                let id = t.id;
                let class = move || if selected.get() == Some(id) { "type-card selected" } else { "type-card" };
                let style = format!("border-left: 4px solid {}", app.with_untracked(|s| s.type_color(&t.name)));
                let subtitle = type_card_subtitle(&t);
                let description = t.description.clone().filter(|d| !d.trim().is_empty());
                view! {
                    <div class=class style=style on:click=move |_| selected.set(Some(id))>
                        <h4>{t.name}</h4>
                        <p>{description.unwrap_or_else(|| "Ingen beskrivning".to_owned())}</p>
                        <small>{subtitle}</small>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    let type_details = move || {
        let Some(t) = selected_type.get() else {
            return view! { <p class="empty-state">"Välj en objekttyp för att se detaljer"</p> }.into_any();
        };
        let type_id = t.id;
        let edit_draft = TypeDraft::from_type(&t);
        let fields = t.ordered_fields();
        let field_rows = if fields.is_empty() {
            view! { <p class="empty-state">"Inga fält definierade"</p> }.into_any()
        } else {
            fields
                .into_iter()
                .map(|field| {
                    let field_id = field.id;
                    let draft = FieldDraft::from_field(&field);
                    let (badge_class, badge_label) = visibility_badge(&field);
                    let mut meta = format!("Typ: {} • Namn: {}", field_type_label(&field), field.field_name);
                    if let Some(help) = field.help_text.as_deref().filter(|h| !h.trim().is_empty()) {
                        meta.push_str(" • ");
                        meta.push_str(help);
                    }
                    view! {
                        <div class="field-item">
                            <div class="field-info">
                                <strong>{field.label().to_owned()}</strong>
                                {field.is_required.then(|| view! { <span class="required-badge">"Obligatorisk"</span> })}
                                <span class=badge_class>{badge_label}</span>
                                <br />
                                <small>{meta}</small>
                            </div>
                            <div class="field-actions">
                                <button
                                    class="btn btn--small"
                                    on:click=move |_| {
                                        field_editor.set(Some(FieldEditor { type_id, field_id: Some(field_id), draft: draft.clone() }))
                                    }
                                >
                                    "Redigera"
                                </button>
                                <button
                                    class="btn btn--small btn--danger"
                                    on:click=move |_| pending_delete.set(Some(PendingDelete::Field { type_id, field_id }))
                                >
                                    "Ta bort"
                                </button>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        };
        let prefix = t.id_prefix.clone().filter(|p| !p.trim().is_empty()).unwrap_or_else(|| "AUTO".to_owned());
        view! {
            <div class="type-detail-view">
                <div class="detail-header">
                    <h3>{t.name.clone()}</h3>
                    <div>
                        <button
                            class="btn btn--small btn--primary"
                            on:click=move |_| type_editor.set(Some(TypeEditor { id: Some(type_id), draft: edit_draft.clone() }))
                        >
                            "Redigera"
                        </button>
                        <button
                            class="btn btn--small btn--danger"
                            on:click=move |_| pending_delete.set(Some(PendingDelete::Type(type_id)))
                        >
                            "Ta bort"
                        </button>
                    </div>
                </div>
                <div class="detail-grid">
                    <div class="detail-item">
                        <span class="detail-label">"Beskrivning"</span>
                        <span class="detail-value">{t.description.clone().unwrap_or_else(|| "N/A".to_owned())}</span>
                    </div>
                    <div class="detail-item">
                        <span class="detail-label">"ID-prefix"</span>
                        <span class="detail-value">{prefix}</span>
                    </div>
                    <div class="detail-item">
                        <span class="detail-label">"Nästa ID-nummer"</span>
                        <span class="detail-value">{t.id_counter.unwrap_or(1)}</span>
                    </div>
                </div>
                <div class="fields-section">
                    <div class="section-header">
                        <h4>"Fält"</h4>
                        <button
                            class="btn btn--small btn--primary"
                            on:click=move |_| {
                                field_editor.set(Some(FieldEditor { type_id, field_id: None, draft: FieldDraft::default() }))
                            }
                        >
                            "Lägg till Fält"
                        </button>
                    </div>
                    <div class="fields-list">{field_rows}</div>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="admin-types">
            <div class="section-header">
                <h3>"Objekttyper Administration"</h3>
                <button class="btn btn--primary" on:click=move |_| type_editor.set(Some(TypeEditor::default()))>
                    "Skapa ny objekttyp"
                </button>
            </div>
            <div class="admin-grid">
                <div class="types-list">{type_cards}</div>
                <div class="type-details">{type_details}</div>
            </div>
            <TypeModal editor=type_editor />
            <FieldModal editor=field_editor />
        </div>
    }
}

#[component]
fn TypeModal(editor: RwSignal<Option<TypeEditor>>) -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let close = move || editor.set(None);

    let edit = move |f: fn(&mut TypeDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            editor.update(|e| {
                if let Some(e) = e {
                    f(&mut e.draft, value);
                }
            });
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = editor.get_untracked() else {
            return;
        };
        let payload = match current.draft.to_payload() {
            Ok(payload) => payload,
            Err(error) => {
                show_toast(toasts, ToastKind::Error, error.to_string());
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                use crate::net::api_schema;

                let result = match current.id {
                    Some(id) => api_schema::update_object_type(id, &payload).await.map(|_| "Objekttyp uppdaterad"),
                    None => api_schema::create_object_type(&payload).await.map(|_| "Objekttyp skapad"),
                };
                match result {
                    Ok(message) => {
                        show_toast(toasts, ToastKind::Success, message);
                        editor.set(None);
                        refresh_object_types(app, toasts).await;
                    }
                    Err(e) => {
                        log::error!("save object type failed: {e}");
                        show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte spara objekttyp"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, app, toasts);
        }
    };

    let draft = move || editor.with(|e| e.as_ref().map(|e| e.draft.clone()).unwrap_or_default());
    let title = move || {
        if editor.with(|e| e.as_ref().is_some_and(|e| e.id.is_some())) { "Redigera objekttyp" } else { "Ny objekttyp" }
    };

    view! {
        <Show when=move || editor.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>{title}</h2>
                        <button class="btn btn--icon" title="Stäng" on:click=move |_| close()>"×"</button>
                    </div>
                    <form on:submit=on_save>
                        <div class="form-group">
                            <label for="type-name">"Namn *"</label>
                            <input
                                id="type-name"
                                type="text"
                                prop:value=move || draft().name
                                on:input=edit(|d, v| d.name = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="type-description">"Beskrivning"</label>
                            <textarea
                                id="type-description"
                                rows="3"
                                prop:value=move || draft().description
                                on:input=edit(|d, v| d.description = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="type-prefix">"ID-prefix"</label>
                            <input
                                id="type-prefix"
                                type="text"
                                maxlength="10"
                                placeholder="t.ex. BYG"
                                prop:value=move || draft().id_prefix
                                on:input=edit(|d, v| d.id_prefix = v)
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
fn FieldModal(editor: RwSignal<Option<FieldEditor>>) -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let close = move || editor.set(None);

    let update = move |f: &dyn Fn(&mut FieldDraft)| {
        editor.update(|e| {
            if let Some(e) = e {
                f(&mut e.draft);
            }
        });
    };
    let edit_text = move |f: fn(&mut FieldDraft, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            update(&|d| f(d, value.clone()));
        }
    };
    let edit_flag = move |f: fn(&mut FieldDraft, bool)| {
        move |ev: leptos::ev::Event| {
            let checked = event_target_checked(&ev);
            update(&|d| f(d, checked));
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = editor.get_untracked() else {
            return;
        };
        let payload = match current.draft.to_payload() {
            Ok(payload) => payload,
            Err(error) => {
                show_toast(toasts, ToastKind::Error, error.to_string());
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                use crate::net::api_schema;

                let result = match current.field_id {
                    Some(field_id) => api_schema::update_field(current.type_id, field_id, &payload)
                        .await
                        .map(|_| "Fält uppdaterat"),
                    None => api_schema::add_field(current.type_id, &payload).await.map(|_| "Fält tillagt"),
                };
                match result {
                    Ok(message) => {
                        show_toast(toasts, ToastKind::Success, message);
                        editor.set(None);
                        refresh_object_types(app, toasts).await;
                    }
                    Err(e) => {
                        log::error!("save field failed: {e}");
                        show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte spara fält"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, app, toasts);
        }
    };

    let draft = Memo::new(move |_| editor.with(|e| e.as_ref().map(|e| e.draft.clone())).unwrap_or_default());
    let is_edit = move || editor.with(|e| e.as_ref().is_some_and(|e| e.field_id.is_some()));
    let type_choices = move || {
        FIELD_TYPE_CHOICES
            .into_iter()
            .map(|(value, label)| view! { <option value=value>{label}</option> })
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=move || editor.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <div class="dialog__header">
                        <h2>{move || if is_edit() { "Redigera fält" } else { "Lägg till fält" }}</h2>
                        <button class="btn btn--icon" title="Stäng" on:click=move |_| close()>"×"</button>
                    </div>
                    <form on:submit=on_save>
                        <div class="form-group">
                            <label for="field-name">"Fältnamn *"</label>
                            <input
                                id="field-name"
                                type="text"
                                readonly=is_edit
                                prop:value=move || draft.get().field_name
                                on:input=edit_text(|d, v| d.field_name = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="field-display-name">"Visningsnamn"</label>
                            <input
                                id="field-display-name"
                                type="text"
                                prop:value=move || draft.get().display_name
                                on:input=edit_text(|d, v| d.display_name = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="field-type">"Fälttyp"</label>
                            <select
                                id="field-type"
                                prop:value=move || draft.get().field_type
                                on:change=edit_text(|d, v| d.field_type = v)
                            >
                                {type_choices}
                            </select>
                        </div>
                        <div class="form-group">
                            <label for="field-options">"Alternativ"</label>
                            <input
                                id="field-options"
                                type="text"
                                disabled=move || draft.get().options_locked()
                                placeholder=move || draft.get().options_placeholder()
                                prop:value=move || draft.get().options_text
                                on:input=edit_text(|d, v| d.options_text = v)
                            />
                        </div>
                        <div class="form-group">
                            <label for="field-help">"Hjälptext"</label>
                            <input
                                id="field-help"
                                type="text"
                                prop:value=move || draft.get().help_text
                                on:input=edit_text(|d, v| d.help_text = v)
                            />
                        </div>
                        <div class="form-group checkbox-group">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.get().is_required
                                    on:change=edit_flag(|d, v| d.is_required = v)
                                />
                                " Obligatoriskt"
                            </label>
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || draft.get().is_table_visible
                                    on:change=edit_flag(|d, v| d.is_table_visible = v)
                                />
                                " Visa i tabeller"
                            </label>
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
fn CategoriesTab(
    categories: RwSignal<Vec<BuildingPartCategory>>,
    pending_delete: RwSignal<Option<PendingDelete>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let new_name = RwSignal::new(String::new());
    // Category being renamed, with the text typed so far.
    let renaming = RwSignal::new(None::<(i64, String)>);

    let create = move |_: leptos::ev::MouseEvent| {
        let name = match crate::state::admin::category_name(&new_name.get_untracked()) {
            Ok(name) => name,
            Err(_) => {
                show_toast(toasts, ToastKind::Error, "Ange ett namn för byggdelskategorin");
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let category = BuildingPartCategory { name, is_active: true, ..BuildingPartCategory::default() };
                match crate::net::api_schema::create_category(&category).await {
                    Ok(_) => {
                        new_name.set(String::new());
                        show_toast(toasts, ToastKind::Success, "Byggdelskategori skapad");
                        refresh_categories(categories, toasts).await;
                    }
                    Err(e) => {
                        log::error!("create category failed: {e}");
                        show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte skapa byggdelskategori"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, toasts);
        }
    };

    let save_rename = move || {
        let Some((id, text)) = renaming.get_untracked() else {
            return;
        };
        let name = match crate::state::admin::category_name(&text) {
            Ok(name) => name,
            Err(error) => {
                show_toast(toasts, ToastKind::Error, error.to_string());
                return;
            }
        };
        let Some(mut category) = categories.with_untracked(|list| list.iter().find(|c| c.id == id).cloned()) else {
            return;
        };
        category.name = name;
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_schema::update_category(&category).await {
                    Ok(_) => {
                        renaming.set(None);
                        show_toast(toasts, ToastKind::Success, "Byggdelskategori uppdaterad");
                        refresh_categories(categories, toasts).await;
                    }
                    Err(e) => {
                        log::error!("update category {id} failed: {e}");
                        show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte uppdatera byggdelskategori"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = category;
        }
    };

    let rows = move || {
        let list = categories.get();
        if list.is_empty() {
            return view! { <p class="empty-state">"Inga byggdelskategorier ännu"</p> }.into_any();
        }
        list.into_iter()
            .map(|category| {
                let id = category.id;
                let class = if category.is_active { "category-item" } else { "category-item inactive" };
                let name = category.name.clone();
                let is_renaming = move || renaming.with(|r| r.as_ref().is_some_and(|(r, _)| *r == id));
                view! {
                    <div class=class>
                        <Show
                            when=is_renaming
                            fallback=move || view! { <span>{category.name.clone()}</span> }
                        >
                            <input
                                type="text"
                                class="form-control"
                                prop:value=move || renaming.with(|r| r.as_ref().map(|(_, t)| t.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    renaming.set(Some((id, value)));
                                }
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
                                    "Enter" => save_rename(),
                                    "Escape" => renaming.set(None),
                                    _ => {}
                                }
                            />
                        </Show>
                        <div class="category-actions">
                            <Show
                                when=is_renaming
                                fallback=move || {
                                    let name = name.clone();
                                    view! {
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| renaming.set(Some((id, name.clone())))
                                        >
                                            "Redigera"
                                        </button>
                                    }
                                }
                            >
                                <button class="btn btn--small btn--primary" on:click=move |_| save_rename()>
                                    "Spara"
                                </button>
                                <button class="btn btn--small" on:click=move |_| renaming.set(None)>"Avbryt"</button>
                            </Show>
                            <button
                                class="btn btn--small btn--danger"
                                on:click=move |_| pending_delete.set(Some(PendingDelete::Category(id)))
                            >
                                "Ta bort"
                            </button>
                        </div>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="category-admin">
            <h3>"Byggdelskategorier"</h3>
            <div class="category-toolbar">
                <input
                    type="text"
                    class="form-control"
                    placeholder="Ny byggdelskategori..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=create>"Lägg till"</button>
            </div>
            <div class="category-list">{rows}</div>
        </div>
    }
}
