//! Back/forward navigation history for the object detail panel.
//!
//! DESIGN
//! ======
//! A linear list of visited object ids with a cursor, like a browser tab:
//! visiting after going back drops the forward entries. The list is bounded
//! by [`HISTORY_CAP`] (oldest evicted) and persisted to `sessionStorage` so a
//! reload keeps the trail for the current tab only.
//!
//! Persisted snapshots are untrusted: [`DetailHistory::repaired`] clamps the
//! cursor and capacity instead of rejecting the whole trail.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{self, StorageArea};

/// Maximum number of remembered entries.
pub const HISTORY_CAP: usize = 50;

/// `sessionStorage` key of the persisted history.
pub const HISTORY_STORAGE_KEY: &str = "byggdel.detail_history";

/// Visited object ids plus the position of the one on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailHistory {
    #[serde(default)]
    entries: Vec<i64>,
    #[serde(default)]
    cursor: Option<usize>,
}

/// Collapse adjacent duplicates, keeping `cursor` on the same logical entry.
fn compact(entries: Vec<i64>, cursor: usize) -> (Vec<i64>, usize) {
    let mut out: Vec<i64> = Vec::with_capacity(entries.len());
    let mut new_cursor = 0;
    for (i, id) in entries.into_iter().enumerate() {
        if out.last() != Some(&id) {
            out.push(id);
        }
        if i == cursor {
            new_cursor = out.len() - 1;
        }
    }
    (out, new_cursor)
}

impl DetailHistory {
    /// Object id under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<i64> {
        self.cursor.and_then(|c| self.entries.get(c).copied())
    }

    #[must_use]
    pub fn entries(&self) -> &[i64] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Record a visit. Returns `false` when `id` is already current.
    pub fn visit(&mut self, id: i64) -> bool {
        if self.current() == Some(id) {
            return false;
        }
        match self.cursor {
            Some(c) => self.entries.truncate(c + 1),
            None => self.entries.clear(),
        }
        self.entries.push(id);
        if self.entries.len() > HISTORY_CAP {
            self.entries.remove(0);
        }
        self.cursor = Some(self.entries.len() - 1);
        true
    }

    /// Step back and return the new current id.
    pub fn back(&mut self) -> Option<i64> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor = self.cursor.map(|c| c - 1);
        self.current()
    }

    /// Step forward and return the new current id.
    pub fn forward(&mut self) -> Option<i64> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor = self.cursor.map(|c| c + 1);
        self.current()
    }

    /// Forget every occurrence of a deleted object.
    ///
    /// The cursor stays on the nearest earlier surviving entry, or the first
    /// one when nothing earlier survives.
    pub fn remove(&mut self, id: i64) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let mut kept = Vec::with_capacity(self.entries.len());
        let mut kept_cursor = 0;
        for (i, entry) in self.entries.iter().copied().enumerate() {
            if entry == id {
                continue;
            }
            kept.push(entry);
            if i <= cursor {
                kept_cursor = kept.len() - 1;
            }
        }
        if kept.is_empty() {
            self.clear();
            return;
        }
        let (entries, cursor) = compact(kept, kept_cursor);
        self.entries = entries;
        self.cursor = Some(cursor);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Bring a deserialized snapshot back within the invariants.
    #[must_use]
    pub fn repaired(mut self) -> Self {
        if self.entries.is_empty() {
            return Self::default();
        }
        let mut cursor = self.cursor.unwrap_or(self.entries.len() - 1).min(self.entries.len() - 1);
        if self.entries.len() > HISTORY_CAP {
            let overflow = self.entries.len() - HISTORY_CAP;
            self.entries.drain(..overflow);
            cursor = cursor.saturating_sub(overflow);
        }
        let (entries, cursor) = compact(self.entries, cursor);
        Self { entries, cursor: Some(cursor) }
    }

    /// Serialize for storage.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Deserialize a stored snapshot. Malformed input gives an empty history.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str::<Self>(raw).map(Self::repaired).unwrap_or_default()
    }

    /// Restore the persisted history for this tab.
    #[must_use]
    pub fn load() -> Self {
        storage::load_json::<Self>(StorageArea::Session, HISTORY_STORAGE_KEY)
            .map(Self::repaired)
            .unwrap_or_default()
    }

    /// Persist to `sessionStorage`.
    pub fn persist(&self) {
        storage::save_json(StorageArea::Session, HISTORY_STORAGE_KEY, self);
    }
}
