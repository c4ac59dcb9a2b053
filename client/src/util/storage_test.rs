#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_json_is_none_without_browser() {
    assert_eq!(load_json::<Vec<i64>>(StorageArea::Session, "byggdel.detail_history"), None);
    assert_eq!(load_json::<bool>(StorageArea::Local, "byggdel.tree_view"), None);
}

#[test]
fn save_and_remove_are_noops_but_callable() {
    save_json(StorageArea::Local, "byggdel.tree_view", &true);
    remove(StorageArea::Local, "byggdel.tree_view");
}
