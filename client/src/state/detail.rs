//! Detail panel state: which object is open, the active tab, and which lazy
//! tabs have already been fetched.
//!
//! DESIGN
//! ======
//! Relations and documents are fetched the first time their tab is shown for
//! an object and then kept until another object is opened. The panel
//! component asks [`DetailState::switch_tab`] whether a fetch is due instead
//! of tracking that itself.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use std::collections::BTreeSet;

use crate::net::types::{FieldType, ObjectRecord};
use crate::util::format::{format_date, format_field_value};

/// Toast shown when the open object cannot be fetched.
pub const DETAIL_LOAD_ERROR: &str = "Kunde inte ladda objektdetaljer";

/// Placeholder for an object without data entries.
pub const EMPTY_DATA_TEXT: &str = "Ingen data registrerad";

const NOT_AVAILABLE: &str = "N/A";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum DetailTab {
    #[default]
    Details,
    Relations,
    Documents,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Details, DetailTab::Relations, DetailTab::Documents];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Details => "Grunddata",
            Self::Relations => "Relationer",
            Self::Documents => "Dokument",
        }
    }

    /// Whether the tab's content is fetched on first view.
    #[must_use]
    pub fn is_lazy(self) -> bool {
        !matches!(self, Self::Details)
    }
}

/// Where the panel is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelLayout {
    /// Narrow panel beside the tree view, with its own header and close button.
    #[default]
    Side,
    /// Wide panel beside the object list, with the compact metadata header.
    Detail,
}

/// Open object and tab bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailState {
    pub object_id: Option<i64>,
    pub tab: DetailTab,
    loaded: BTreeSet<DetailTab>,
}

impl DetailState {
    /// Show `object_id` on the details tab. Re-opening the same object keeps
    /// its loaded tabs.
    pub fn open(&mut self, object_id: i64) {
        if self.object_id != Some(object_id) {
            self.loaded.clear();
        }
        self.object_id = Some(object_id);
        self.tab = DetailTab::Details;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Activate `tab`. Returns `true` when its content must be fetched now.
    pub fn switch_tab(&mut self, tab: DetailTab) -> bool {
        self.tab = tab;
        self.needs_load(tab)
    }

    #[must_use]
    pub fn needs_load(&self, tab: DetailTab) -> bool {
        self.object_id.is_some() && tab.is_lazy() && !self.loaded.contains(&tab)
    }

    pub fn mark_loaded(&mut self, tab: DetailTab) {
        self.loaded.insert(tab);
    }
}

/// One label/value cell of the compact metadata header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderItem {
    pub label: &'static str,
    pub value: String,
}

fn or_na(value: Option<String>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

/// Metadata header rows for the wide layout: identity first, lifecycle second.
pub fn header_rows(obj: &ObjectRecord) -> [[HeaderItem; 3]; 2] {
    let auto_id = obj.auto_id.clone().unwrap_or_default();
    let type_name = if obj.type_name().is_empty() { NOT_AVAILABLE.to_owned() } else { obj.type_name().to_owned() };
    [
        [
            HeaderItem { label: "ID", value: auto_id.clone() },
            HeaderItem { label: "TYP", value: type_name },
            HeaderItem { label: "SKAPAD", value: format_date(obj.created_at.as_deref()) },
        ],
        [
            HeaderItem { label: "STATUS", value: or_na(obj.meta("status")) },
            HeaderItem { label: "VERSION", value: or_na(obj.meta("version")) },
            HeaderItem { label: "ID (Full)", value: obj.meta("id_full").unwrap_or(auto_id) },
        ],
    ]
}

/// Label/value pairs for every non-null data entry, in backend order.
///
/// Labels come from the type's field display names. The wide layout formats
/// values by field type; the side layout shows raw text.
pub fn detail_entries(obj: &ObjectRecord, layout: PanelLayout) -> Vec<(String, String)> {
    let fields = obj.object_type.as_ref().map(|t| t.fields.as_slice()).unwrap_or_default();
    obj.data
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let field = fields.iter().find(|f| &f.field_name == key);
            let label = field.map_or_else(|| key.clone(), |f| f.label().to_owned());
            let text = match layout {
                PanelLayout::Detail => {
                    format_field_value(Some(value), field.map_or(FieldType::Unknown, |f| f.field_type))
                }
                PanelLayout::Side => match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
            };
            (label, text)
        })
        .collect()
}
