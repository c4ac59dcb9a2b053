use super::*;

use crate::net::types::ObjectTypeRef;

fn object(id: i64, auto_id: &str, name: &str, type_name: &str) -> ObjectRecord {
    ObjectRecord {
        id,
        auto_id: Some(auto_id.to_owned()),
        object_type: Some(ObjectTypeRef { name: type_name.to_owned(), ..ObjectTypeRef::default() }),
        data: serde_json::json!({"name": name}).as_object().cloned().unwrap(),
        ..ObjectRecord::default()
    }
}

fn relation(id: i64, relation_type: &str, direction: RelationDirection) -> Relation {
    Relation {
        id,
        source_object_id: 10,
        target_object_id: 20,
        relation_type: relation_type.to_owned(),
        direction,
        source_object: Some(object(10, "BYG-10", "Vägg", "Byggdel")),
        target_object: Some(object(20, "PRD-20", "Skruv", "Produkt")),
        ..Relation::default()
    }
}

#[test]
fn linked_object_follows_direction() {
    let outgoing = relation(1, "består_av", RelationDirection::Outgoing);
    let incoming = relation(2, "består_av", RelationDirection::Incoming);
    assert_eq!(linked_object(&outgoing).map(|o| o.id), Some(20));
    assert_eq!(linked_object(&incoming).map(|o| o.id), Some(10));
    assert_eq!(delete_owner_id(&outgoing), 10);
    assert_eq!(delete_owner_id(&incoming), 20);
}

#[test]
fn groups_by_type_and_direction_in_first_seen_order() {
    let relations = vec![
        relation(1, "består_av", RelationDirection::Outgoing),
        relation(2, "ingår_i", RelationDirection::Incoming),
        relation(3, "består_av", RelationDirection::Incoming),
        relation(4, "består_av", RelationDirection::Outgoing),
        relation(5, "", RelationDirection::Outgoing),
    ];
    let groups = group_relations(&relations, &DisplayFieldMap::new());
    let keys: Vec<String> = groups.iter().map(RelationGroup::key).collect();
    assert_eq!(
        keys,
        vec!["består_av|utgående", "ingår_i|inkommande", "består_av|inkommande", "Övriga|utgående"]
    );
    assert_eq!(groups[0].rows.len(), 2);
    assert_eq!(groups[0].heading(), "Består av (utgående)");
    assert_eq!(groups[1].heading(), "Ingår i (inkommande)");
}

#[test]
fn rows_describe_the_far_end() {
    let groups = group_relations(&[relation(1, "består_av", RelationDirection::Incoming)], &DisplayFieldMap::new());
    let row = &groups[0].rows[0];
    assert_eq!(row.linked_id, Some(10));
    assert_eq!(row.linked_auto_id, "BYG-10");
    assert_eq!(row.linked_name, "Vägg");
    assert_eq!(row.linked_type, "Byggdel");
    assert_eq!(row.owner_object_id, 20);
}

#[test]
fn rows_without_embedded_object_use_placeholders() {
    let mut rel = relation(1, "består_av", RelationDirection::Outgoing);
    rel.target_object = None;
    rel.metadata = Some(serde_json::json!({"description": "Via skruvförband"}));
    let groups = group_relations(&[rel], &DisplayFieldMap::new());
    let row = &groups[0].rows[0];
    assert_eq!(row.linked_name, UNKNOWN_OBJECT);
    assert_eq!(row.linked_auto_id, "N/A");
    assert_eq!(row.linked_type, "N/A");
    assert_eq!(row.description.as_deref(), Some("Via skruvförband"));
}

#[test]
fn draft_requires_target_and_type() {
    let mut draft = RelationDraft::with_type(Some("består_av"));
    assert_eq!(draft.payload(), None);
    draft.target_object_id = Some(4);
    draft.description = "  ".to_owned();
    let payload = draft.payload().unwrap();
    assert_eq!(payload.relation_type, "består_av");
    assert_eq!(payload.description, None);

    draft.relation_type = " ".to_owned();
    assert_eq!(draft.payload(), None);
}
