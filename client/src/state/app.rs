//! Application-wide navigation and modal state.
//!
//! DESIGN
//! ======
//! Which page is shown, which object is open, which modal is up and the
//! schema caches every page reads live in one [`AppState`] value held in a
//! context signal. Components never mutate it field by field: they dispatch
//! an [`AppAction`] and the signal stores the result of [`AppState::apply`],
//! which keeps the transitions in one place and testable without a DOM.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::net::types::{ObjectType, TreeDisplayMap};
use crate::util::display_name::{DisplayFieldMap, display_field_map};
use crate::util::format::type_color;
use crate::util::storage::{self, StorageArea};

/// `localStorage` key remembering whether the tree replaces the list.
pub const TREE_VIEW_STORAGE_KEY: &str = "byggdel.tree_view_active";

/// Top-level page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Objects,
    Admin,
    Products,
}

impl View {
    pub const ALL: [View; 3] = [View::Objects, View::Admin, View::Products];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Objects => "Objekt",
            Self::Admin => "Admin",
            Self::Products => "Produkter",
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Objects => "/",
            Self::Admin => "/admin",
            Self::Products => "/products",
        }
    }
}

/// The modal currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modal {
    CreateObject,
    EditObject(i64),
    /// Create a copy of the object with this id.
    DuplicateObject(i64),
    AddRelation { object_id: i64, relation_type: Option<String> },
}

/// Everything a component may ask the app to do.
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    SwitchView(View),
    ToggleTreeView,
    OpenObject(i64),
    CloseObject,
    /// An object was deleted; forget it wherever it is referenced.
    ObjectDeleted(i64),
    OpenModal(Modal),
    CloseModal,
    SelectType(Option<String>),
    SetObjectTypes(Vec<ObjectType>),
    SetTreeDisplay(TreeDisplayMap),
    /// Objects or relations changed; lists should refetch.
    DataChanged,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub view: View,
    pub tree_view_active: bool,
    pub current_object_id: Option<i64>,
    pub modal: Option<Modal>,
    /// Source object while a duplicate modal is open.
    pub duplicate_source: Option<i64>,
    /// Type name filter of the object list.
    pub selected_type: Option<String>,
    pub object_types: Vec<ObjectType>,
    pub display_fields: DisplayFieldMap,
    /// Bumped on every mutation so list resources refetch.
    pub data_version: u64,
}

impl AppState {
    /// Start-up state with the persisted tree toggle.
    #[must_use]
    pub fn restore() -> Self {
        Self {
            tree_view_active: storage::load_json(StorageArea::Local, TREE_VIEW_STORAGE_KEY).unwrap_or(false),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn apply(mut self, action: AppAction) -> Self {
        match action {
            AppAction::SwitchView(view) => {
                self.view = view;
                self.modal = None;
                self.duplicate_source = None;
                self.current_object_id = None;
            }
            AppAction::ToggleTreeView => {
                self.tree_view_active = !self.tree_view_active;
                self.current_object_id = None;
            }
            AppAction::OpenObject(id) => self.current_object_id = Some(id),
            AppAction::CloseObject => self.current_object_id = None,
            AppAction::ObjectDeleted(id) => {
                if self.current_object_id == Some(id) {
                    self.current_object_id = None;
                }
                if matches!(self.modal, Some(Modal::EditObject(m) | Modal::DuplicateObject(m)) if m == id) {
                    self.modal = None;
                    self.duplicate_source = None;
                }
                self.data_version += 1;
            }
            AppAction::OpenModal(modal) => {
                self.duplicate_source = match modal {
                    Modal::DuplicateObject(id) => Some(id),
                    _ => None,
                };
                self.modal = Some(modal);
            }
            AppAction::CloseModal => {
                self.modal = None;
                self.duplicate_source = None;
            }
            AppAction::SelectType(type_name) => {
                self.selected_type = type_name.filter(|t| !t.trim().is_empty());
            }
            AppAction::SetObjectTypes(types) => {
                if let Some(selected) = &self.selected_type {
                    if !types.iter().any(|t| &t.name == selected) {
                        self.selected_type = None;
                    }
                }
                self.object_types = types;
            }
            AppAction::SetTreeDisplay(config) => self.display_fields = display_field_map(&config),
            AppAction::DataChanged => self.data_version += 1,
        }
        self
    }

    #[must_use]
    pub fn object_type_by_id(&self, id: i64) -> Option<&ObjectType> {
        self.object_types.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn object_type_by_name(&self, name: &str) -> Option<&ObjectType> {
        self.object_types.iter().find(|t| t.name == name)
    }

    /// Full schema of the list's type filter.
    #[must_use]
    pub fn selected_object_type(&self) -> Option<&ObjectType> {
        self.selected_type.as_deref().and_then(|name| self.object_type_by_name(name))
    }

    /// Badge color for a type name, honouring admin-chosen colors.
    #[must_use]
    pub fn type_color(&self, type_name: &str) -> String {
        let custom = self.object_type_by_name(type_name).and_then(|t| t.color.as_deref());
        type_color(type_name, custom)
    }
}

/// Tree toggle value to write to `localStorage` after a transition, if it changed.
#[must_use]
pub fn tree_toggle_change(was_active: bool, after: &AppState) -> Option<bool> {
    (was_active != after.tree_view_active).then_some(after.tree_view_active)
}

/// Apply `action` to the shared app signal, then persist what it changed.
pub fn dispatch(app: RwSignal<AppState>, action: AppAction) {
    let mut toggled = None;
    app.update(|state| {
        let was_active = state.tree_view_active;
        *state = std::mem::take(state).apply(action);
        toggled = tree_toggle_change(was_active, state);
    });
    if let Some(active) = toggled {
        storage::save_json(StorageArea::Local, TREE_VIEW_STORAGE_KEY, &active);
    }
}
