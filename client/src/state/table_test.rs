use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: &'static str,
    name: &'static str,
    size: &'static str,
    created: &'static str,
}

impl TableRow for Row {
    fn cell_text(&self, key: &str) -> String {
        match key {
            "id" => self.id,
            "name" => self.name,
            "size" => self.size,
            "created" => self.created,
            _ => "",
        }
        .to_owned()
    }
}

fn rows() -> Vec<Row> {
    vec![
        Row { id: "BYG-3", name: "Öppning", size: "10", created: "2025-01-03" },
        Row { id: "BYG-1", name: "Ankarskruv", size: "2,5", created: "2025-02-01" },
        Row { id: "BYG-2", name: "Vägg", size: "x", created: "2024-12-31" },
    ]
}

fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("id", "ID"),
        ColumnDef::new("name", "Namn"),
        ColumnDef::new("size", "Storlek").sort_kind(SortKind::Number),
        ColumnDef::new("created", "Skapad").sort_kind(SortKind::Date).unsearchable(),
    ]
}

fn ids(found: &[&Row]) -> Vec<&'static str> {
    found.iter().map(|r| r.id).collect()
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn initial_sort_is_first_sortable_ascending() {
    let state = TableState::new(vec![ColumnDef::new("x", "X").unsortable(), ColumnDef::new("name", "Namn")]);
    assert_eq!(state.sort_field.as_deref(), Some("name"));
    assert_eq!(state.sort_direction, SortDirection::Asc);
}

#[test]
fn toggle_sort_flips_then_switches() {
    let mut state = TableState::new(columns());
    state.toggle_sort("id");
    assert_eq!(state.sort_direction, SortDirection::Desc);
    assert_eq!(state.sort_indicator("id"), "↓");
    state.toggle_sort("name");
    assert_eq!(state.sort_field.as_deref(), Some("name"));
    assert_eq!(state.sort_direction, SortDirection::Asc);
    assert_eq!(state.sort_indicator("name"), "↑");
    assert_eq!(state.sort_indicator("id"), "↕");
}

#[test]
fn toggle_sort_ignores_unsortable_columns() {
    let mut state = TableState::new(vec![ColumnDef::new("a", "A"), ColumnDef::new("b", "B").unsortable()]);
    state.toggle_sort("b");
    assert_eq!(state.sort_field.as_deref(), Some("a"));
}

#[test]
fn text_sort_uses_swedish_order() {
    let mut state = TableState::new(columns());
    state.toggle_sort("name");
    let data = rows();
    assert_eq!(ids(&state.filtered_rows(&data)), vec!["BYG-1", "BYG-2", "BYG-3"]);
    state.toggle_sort("name");
    assert_eq!(ids(&state.filtered_rows(&data)), vec!["BYG-3", "BYG-2", "BYG-1"]);
}

#[test]
fn number_sort_treats_garbage_as_zero() {
    let mut state = TableState::new(columns());
    state.toggle_sort("size");
    let data = rows();
    assert_eq!(ids(&state.filtered_rows(&data)), vec!["BYG-2", "BYG-1", "BYG-3"]);
}

#[test]
fn date_sort_compares_iso_strings() {
    let mut state = TableState::new(columns());
    state.toggle_sort("created");
    let data = rows();
    assert_eq!(ids(&state.filtered_rows(&data)), vec!["BYG-2", "BYG-3", "BYG-1"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let data = vec![
        Row { id: "a", name: "Same", size: "1", created: "" },
        Row { id: "b", name: "same", size: "1", created: "" },
        Row { id: "c", name: "SAME", size: "1", created: "" },
    ];
    let mut state = TableState::new(columns());
    state.toggle_sort("name");
    assert_eq!(ids(&state.filtered_rows(&data)), vec!["a", "b", "c"]);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn global_search_checks_searchable_columns_only() {
    let data = rows();
    let mut state = TableState::new(columns());
    state.set_search("  VÄGG ");
    assert_eq!(ids(&state.filtered_rows(&data)), vec!["BYG-2"]);
    state.set_search("2025-02");
    assert!(state.filtered_rows(&data).is_empty());
}

#[test]
fn column_searches_are_anded() {
    let data = rows();
    let mut state = TableState::new(columns());
    state.set_column_search("id", "byg");
    state.set_column_search("name", "n");
    assert_eq!(ids(&state.filtered_rows(&data)), vec!["BYG-1", "BYG-3"]);
    state.set_column_search("size", "10");
    assert_eq!(ids(&state.filtered_rows(&data)), vec!["BYG-3"]);
}

#[test]
fn blank_column_search_is_cleared() {
    let mut state = TableState::new(columns());
    state.set_column_search("name", "x");
    state.set_column_search("name", "   ");
    assert!(state.column_searches.is_empty());
}

#[test]
fn set_columns_keeps_surviving_searches_and_resets_sort() {
    let mut state = TableState::new(columns());
    state.set_column_search("name", "vägg");
    state.set_column_search("size", "1");
    state.toggle_sort("size");
    state.toggle_sort("size");

    state.set_columns(vec![ColumnDef::new("id", "ID"), ColumnDef::new("name", "Namn")]);
    assert_eq!(state.column_search("name"), "vägg");
    assert_eq!(state.column_search("size"), "");
    assert_eq!(state.sort_field.as_deref(), Some("id"));
    assert_eq!(state.sort_direction, SortDirection::Asc);
}

#[test]
fn set_columns_keeps_sort_when_column_survives() {
    let mut state = TableState::new(columns());
    state.toggle_sort("name");
    state.toggle_sort("name");
    state.set_columns(columns());
    assert_eq!(state.sort_field.as_deref(), Some("name"));
    assert_eq!(state.sort_direction, SortDirection::Desc);
}

// =============================================================
// Highlighting
// =============================================================

#[test]
fn active_terms_merge_global_and_column() {
    let mut state = TableState::new(columns());
    state.set_search("Vägg yttre");
    state.set_column_search("name", "vägg inre");
    assert_eq!(state.active_search_terms("name"), vec!["vägg", "yttre", "inre"]);
    assert_eq!(state.active_search_terms("id"), vec!["vägg", "yttre"]);
}

#[test]
fn highlight_marks_case_insensitive_matches() {
    let segments = highlight_segments("Yttervägg Vägg", &["vägg".to_owned()]);
    assert_eq!(
        segments,
        vec![
            ("Ytter".to_owned(), false),
            ("vägg".to_owned(), true),
            (" ".to_owned(), false),
            ("Vägg".to_owned(), true),
        ]
    );
}

#[test]
fn highlight_prefers_longest_term_and_merges_runs() {
    let segments = highlight_segments("abcd", &["ab".to_owned(), "abc".to_owned(), "d".to_owned()]);
    assert_eq!(segments, vec![("abcd".to_owned(), true)]);
}

#[test]
fn highlight_without_terms_is_plain() {
    assert_eq!(highlight_segments("Vägg", &[]), vec![("Vägg".to_owned(), false)]);
    assert!(highlight_segments("", &["a".to_owned()]).is_empty());
}
