//! Tree view model: column search, ancestor-preserving filter and flattening
//! into indented table rows.
//!
//! DESIGN
//! ======
//! The backend returns a nested hierarchy (`group` nodes per type, objects
//! below). The view renders it as a flat table, so the model filters the
//! hierarchy first and then flattens the visible part with a depth per row.
//!
//! A node survives filtering when it matches every active column term or when
//! any descendant survives. Ancestors kept only for a descendant are
//! force-expanded while a search is active, independently of the user's own
//! expand state, which is restored once the search is cleared.

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;

use std::collections::{BTreeMap, BTreeSet};

use crate::net::types::TreeNode;

pub const TREE_EMPTY_TEXT: &str = "Inga byggdelar ännu";

pub const TREE_SEARCH_DEBOUNCE_MS: u32 = 350;

/// Left padding per depth level, in pixels.
pub const TREE_INDENT_PX: usize = 12;

/// Searchable tree columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TreeColumn {
    Name,
    Id,
    Type,
    Kravtext,
    Beskrivning,
    Files,
}

impl TreeColumn {
    pub const ALL: [TreeColumn; 6] = [
        TreeColumn::Name,
        TreeColumn::Id,
        TreeColumn::Type,
        TreeColumn::Kravtext,
        TreeColumn::Beskrivning,
        TreeColumn::Files,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Namn",
            Self::Id => "ID",
            Self::Type => "Typ",
            Self::Kravtext => "Kravtext",
            Self::Beskrivning => "Beskrivning",
            Self::Files => "Filer",
        }
    }

    /// Text of this column for `node`.
    pub fn value(self, node: &TreeNode) -> String {
        match self {
            Self::Name => node.name.clone(),
            Self::Id => node.auto_id.clone().unwrap_or_default(),
            Self::Type => node.kind.clone().unwrap_or_default(),
            Self::Kravtext => node.kravtext.clone().unwrap_or_default(),
            Self::Beskrivning => node.beskrivning.clone().unwrap_or_default(),
            Self::Files => node.files.iter().map(|f| f.label()).collect::<Vec<_>>().join(" "),
        }
    }
}

/// One rendered line of the tree table.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeRow {
    /// The node with its children stripped.
    pub node: TreeNode,
    pub depth: usize,
    pub child_count: usize,
    pub expanded: bool,
}

impl TreeRow {
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.child_count > 0
    }

    #[must_use]
    pub fn indent_px(&self) -> usize {
        self.depth * TREE_INDENT_PX
    }
}

/// Loaded hierarchy plus the user's expand, search and selection state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeState {
    pub nodes: Vec<TreeNode>,
    pub expanded: BTreeSet<String>,
    pub searches: BTreeMap<TreeColumn, String>,
    pub selected: Option<i64>,
}

impl TreeState {
    pub fn set_nodes(&mut self, nodes: Vec<TreeNode>) {
        self.nodes = nodes;
    }

    pub fn set_search(&mut self, column: TreeColumn, term: impl Into<String>) {
        let term = term.into();
        if term.trim().is_empty() {
            self.searches.remove(&column);
        } else {
            self.searches.insert(column, term);
        }
    }

    #[must_use]
    pub fn search(&self, column: TreeColumn) -> &str {
        self.searches.get(&column).map_or("", String::as_str)
    }

    #[must_use]
    pub fn has_active_search(&self) -> bool {
        self.searches.values().any(|t| !t.trim().is_empty())
    }

    /// Flip the user's expand state of `node_id`.
    pub fn toggle(&mut self, node_id: &str) {
        if !self.expanded.remove(node_id) {
            self.expanded.insert(node_id.to_owned());
        }
    }

    pub fn select(&mut self, object_id: Option<i64>) {
        self.selected = object_id;
    }

    #[must_use]
    pub fn is_selected(&self, node: &TreeNode) -> bool {
        self.selected.is_some() && node.object_id() == self.selected
    }

    fn active_terms(&self) -> Vec<(TreeColumn, String)> {
        self.searches
            .iter()
            .map(|(column, term)| (*column, term.trim().to_lowercase()))
            .filter(|(_, term)| !term.is_empty())
            .collect()
    }

    /// Rows to render, filtered and flattened in display order.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let terms = self.active_terms();
        let mut forced = BTreeSet::new();
        let filtered: Vec<TreeNode> = if terms.is_empty() {
            self.nodes.clone()
        } else {
            self.nodes.iter().filter_map(|n| filter_node(n, &terms, &mut forced)).collect()
        };
        let mut rows = Vec::new();
        for node in &filtered {
            self.flatten(node, 0, &forced, &mut rows);
        }
        rows
    }

    fn flatten(&self, node: &TreeNode, depth: usize, forced: &BTreeSet<String>, rows: &mut Vec<TreeRow>) {
        let expanded = forced.contains(&node.id) || self.expanded.contains(&node.id);
        rows.push(TreeRow {
            node: TreeNode { children: Vec::new(), ..node.clone() },
            depth,
            child_count: node.children.len(),
            expanded,
        });
        if expanded {
            for child in &node.children {
                self.flatten(child, depth + 1, forced, rows);
            }
        }
    }
}

fn node_matches(node: &TreeNode, terms: &[(TreeColumn, String)]) -> bool {
    terms.iter().all(|(column, term)| column.value(node).to_lowercase().contains(term.as_str()))
}

/// Keep `node` if it or a descendant matches; record ancestors to force open.
fn filter_node(node: &TreeNode, terms: &[(TreeColumn, String)], forced: &mut BTreeSet<String>) -> Option<TreeNode> {
    let children: Vec<TreeNode> = node.children.iter().filter_map(|c| filter_node(c, terms, forced)).collect();
    if children.is_empty() && !node_matches(node, terms) {
        return None;
    }
    if !children.is_empty() {
        forced.insert(node.id.clone());
    }
    Some(TreeNode { children, ..node.clone() })
}
