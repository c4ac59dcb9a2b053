//! Column, filter and sort model behind the `SystemTable` component.
//!
//! DESIGN
//! ======
//! The table is generic over its rows through [`TableRow`], which only has to
//! produce the text of a cell. Filtering, sorting and highlight segmentation
//! all work on that text so the component stays a thin renderer.
//!
//! Filtering is two-stage: the global term must appear in at least one
//! searchable column, then every non-empty column term must appear in its own
//! column. Sorting is stable, so equal keys keep backend order.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::util::collate::swedish_cmp;

/// Text shown in the single row of an empty result.
pub const DEFAULT_EMPTY_TEXT: &str = "Inga rader hittades";

/// Delay between the last keystroke in a search input and re-filtering.
pub const SEARCH_DEBOUNCE_MS: u32 = 280;

/// How a column compares when sorted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKind {
    #[default]
    Text,
    Number,
    /// ISO timestamps, compared as strings.
    Date,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// One table column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub searchable: bool,
    pub class: Option<String>,
    /// Render the cell as an object-type badge.
    pub type_badge: bool,
    pub sort_kind: SortKind,
}

impl ColumnDef {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
            searchable: true,
            class: None,
            type_badge: false,
            sort_kind: SortKind::Text,
        }
    }

    #[must_use]
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    #[must_use]
    pub fn unsearchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn type_badge(mut self) -> Self {
        self.type_badge = true;
        self
    }

    #[must_use]
    pub fn sort_kind(mut self, kind: SortKind) -> Self {
        self.sort_kind = kind;
        self
    }
}

/// A row that can be shown in a `SystemTable`.
pub trait TableRow {
    /// Text of the cell under column `key`, used for search and sort.
    /// Unknown keys give `""`.
    fn cell_text(&self, key: &str) -> String;

    /// Text rendered in the cell. Defaults to [`TableRow::cell_text`].
    fn cell_display(&self, key: &str) -> String {
        self.cell_text(key)
    }
}

/// Search and sort state for one table instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableState {
    pub columns: Vec<ColumnDef>,
    pub search: String,
    pub column_searches: BTreeMap<String, String>,
    pub sort_field: Option<String>,
    pub sort_direction: SortDirection,
}

fn first_sortable(columns: &[ColumnDef]) -> Option<String> {
    columns.iter().find(|c| c.sortable).map(|c| c.key.clone())
}

fn parse_number(text: &str) -> f64 {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}')
        .map(|c| match c {
            ',' => '.',
            '\u{2212}' => '-',
            other => other,
        })
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

fn compare_cells(kind: SortKind, a: &str, b: &str) -> Ordering {
    match kind {
        SortKind::Text => swedish_cmp(a, b),
        SortKind::Number => parse_number(a).total_cmp(&parse_number(b)),
        SortKind::Date => a.cmp(b),
    }
}

impl TableState {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        let sort_field = first_sortable(&columns);
        Self { columns, sort_field, ..Self::default() }
    }

    fn column(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Replace the column set, keeping searches of columns that survive.
    pub fn set_columns(&mut self, columns: Vec<ColumnDef>) {
        self.column_searches.retain(|key, _| columns.iter().any(|c| &c.key == key && c.searchable));
        let sort_survives = self
            .sort_field
            .as_deref()
            .is_some_and(|field| columns.iter().any(|c| c.key == field && c.sortable));
        if !sort_survives {
            self.sort_field = first_sortable(&columns);
            self.sort_direction = SortDirection::Asc;
        }
        self.columns = columns;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_column_search(&mut self, key: &str, term: impl Into<String>) {
        let term = term.into();
        if term.trim().is_empty() {
            self.column_searches.remove(key);
        } else {
            self.column_searches.insert(key.to_owned(), term);
        }
    }

    #[must_use]
    pub fn column_search(&self, key: &str) -> &str {
        self.column_searches.get(key).map_or("", String::as_str)
    }

    /// Header click: same column flips direction, a new one sorts ascending.
    pub fn toggle_sort(&mut self, key: &str) {
        if !self.column(key).is_some_and(|c| c.sortable) {
            return;
        }
        if self.sort_field.as_deref() == Some(key) {
            self.sort_direction = match self.sort_direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.sort_field = Some(key.to_owned());
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Header arrow for `key`.
    #[must_use]
    pub fn sort_indicator(&self, key: &str) -> &'static str {
        if self.sort_field.as_deref() != Some(key) {
            return "↕";
        }
        match self.sort_direction {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }

    /// Rows passing the global and column filters, in sorted order.
    pub fn filtered_rows<'a, R: TableRow>(&self, rows: &'a [R]) -> Vec<&'a R> {
        let global = self.search.trim().to_lowercase();
        let column_terms: Vec<(&str, String)> = self
            .column_searches
            .iter()
            .filter(|(key, _)| self.column(key).is_some_and(|c| c.searchable))
            .map(|(key, term)| (key.as_str(), term.trim().to_lowercase()))
            .filter(|(_, term)| !term.is_empty())
            .collect();

        let mut out: Vec<&R> = rows
            .iter()
            .filter(|row| {
                global.is_empty()
                    || self
                        .columns
                        .iter()
                        .filter(|c| c.searchable)
                        .any(|c| row.cell_text(&c.key).to_lowercase().contains(&global))
            })
            .filter(|row| {
                column_terms
                    .iter()
                    .all(|(key, term)| row.cell_text(key).to_lowercase().contains(term.as_str()))
            })
            .collect();

        let sort_column = self.sort_field.as_deref().and_then(|f| self.column(f)).filter(|c| c.sortable);
        if let Some(column) = sort_column {
            out.sort_by(|a, b| {
                let ord = compare_cells(column.sort_kind, &a.cell_text(&column.key), &b.cell_text(&column.key));
                match self.sort_direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        out
    }

    /// Lower-cased, de-duplicated words to highlight in column `key`.
    #[must_use]
    pub fn active_search_terms(&self, key: &str) -> Vec<String> {
        let mut terms: Vec<String> = Vec::new();
        for word in self.search.split_whitespace().chain(self.column_search(key).split_whitespace()) {
            let word = word.to_lowercase();
            if !terms.contains(&word) {
                terms.push(word);
            }
        }
        terms
    }
}

/// Split `text` into `(segment, is_match)` pairs for highlighting.
///
/// Matching is case-insensitive and prefers the longest term at each
/// position. Adjacent segments never share the same flag.
pub fn highlight_segments(text: &str, terms: &[String]) -> Vec<(String, bool)> {
    let chars: Vec<char> = text.chars().collect();
    let lower: Vec<char> = chars.iter().map(|c| c.to_lowercase().next().unwrap_or(*c)).collect();
    let mut needles: Vec<Vec<char>> = terms
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| t.chars().map(|c| c.to_lowercase().next().unwrap_or(c)).collect())
        .collect();
    needles.sort_by_key(|n| std::cmp::Reverse(n.len()));

    let mut segments: Vec<(String, bool)> = Vec::new();
    let mut push = |piece: &[char], hit: bool| {
        if piece.is_empty() {
            return;
        }
        match segments.last_mut() {
            Some((text, flag)) if *flag == hit => text.extend(piece),
            _ => segments.push((piece.iter().collect(), hit)),
        }
    };

    let mut i = 0;
    while i < chars.len() {
        let matched = needles.iter().find(|n| lower[i..].starts_with(n)).map(Vec::len);
        match matched {
            Some(len) => {
                push(&chars[i..i + len], true);
                i += len;
            }
            None => {
                push(&chars[i..=i], false);
                i += 1;
            }
        }
    }
    segments
}
