//! Grouping and row projection for the relation manager.
//!
//! Relations arrive flat for one object with a direction relative to it. The
//! manager shows one section per `relation_type|direction` in first-seen
//! order, and each row describes the object at the other end.

#[cfg(test)]
#[path = "relations_test.rs"]
mod relations_test;

use crate::net::types::{ObjectRecord, Relation, RelationDirection, RelationPayload};
use crate::util::display_name::{DisplayFieldMap, resolve_object_display_name};
use crate::util::format::relation_type_label;

/// Group heading used when a relation carries no type.
pub const UNTYPED_RELATION: &str = "Övriga";

pub const UNKNOWN_OBJECT: &str = "Okänt objekt";

pub const RELATIONS_EMPTY_TEXT: &str = "Inga relationer ännu";

/// Swedish label for a relation direction.
pub fn direction_label(direction: RelationDirection) -> &'static str {
    match direction {
        RelationDirection::Incoming => "inkommande",
        RelationDirection::Outgoing => "utgående",
    }
}

/// The object at the far end of `relation`.
pub fn linked_object(relation: &Relation) -> Option<&ObjectRecord> {
    match relation.direction {
        RelationDirection::Incoming => relation.source_object.as_ref(),
        RelationDirection::Outgoing => relation.target_object.as_ref(),
    }
}

/// Object id the delete endpoint is addressed through.
pub fn delete_owner_id(relation: &Relation) -> i64 {
    match relation.direction {
        RelationDirection::Incoming => relation.target_object_id,
        RelationDirection::Outgoing => relation.source_object_id,
    }
}

/// Free-text note on a relation, from the column or legacy metadata.
pub fn relation_description(relation: &Relation) -> Option<String> {
    relation
        .description
        .clone()
        .or_else(|| {
            relation
                .metadata
                .as_ref()
                .and_then(|m| m.get("description"))
                .and_then(|d| d.as_str())
                .map(str::to_owned)
        })
        .filter(|d| !d.trim().is_empty())
}

/// One rendered relation line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationRow {
    pub relation_id: i64,
    pub owner_object_id: i64,
    pub linked_id: Option<i64>,
    pub linked_auto_id: String,
    pub linked_name: String,
    pub linked_type: String,
    pub description: Option<String>,
}

/// Relations sharing a type and direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationGroup {
    pub relation_type: String,
    pub direction: RelationDirection,
    pub rows: Vec<RelationRow>,
}

impl RelationGroup {
    /// Grouping key, `type|direction`.
    pub fn key(&self) -> String {
        format!("{}|{}", self.relation_type, direction_label(self.direction))
    }

    /// e.g. `Består av (utgående)`.
    pub fn heading(&self) -> String {
        format!("{} ({})", relation_type_label(&self.relation_type), direction_label(self.direction))
    }
}

fn relation_row(relation: &Relation, display_fields: &DisplayFieldMap) -> RelationRow {
    let linked = linked_object(relation);
    let name = linked.map(|o| resolve_object_display_name(o, display_fields)).unwrap_or_default();
    let na = || "N/A".to_owned();
    RelationRow {
        relation_id: relation.id,
        owner_object_id: delete_owner_id(relation),
        linked_id: linked.map(|o| o.id),
        linked_auto_id: linked.and_then(|o| o.auto_id.clone()).unwrap_or_else(na),
        linked_name: if name.is_empty() { UNKNOWN_OBJECT.to_owned() } else { name },
        linked_type: linked.map(ObjectRecord::type_name).filter(|t| !t.is_empty()).map_or_else(na, str::to_owned),
        description: relation_description(relation),
    }
}

/// Group relations by type and direction, keeping first-seen order.
pub fn group_relations(relations: &[Relation], display_fields: &DisplayFieldMap) -> Vec<RelationGroup> {
    let mut groups: Vec<RelationGroup> = Vec::new();
    for relation in relations {
        let relation_type =
            if relation.relation_type.trim().is_empty() { UNTYPED_RELATION } else { relation.relation_type.as_str() };
        let row = relation_row(relation, display_fields);
        match groups.iter_mut().find(|g| g.relation_type == relation_type && g.direction == relation.direction) {
            Some(group) => group.rows.push(row),
            None => groups.push(RelationGroup {
                relation_type: relation_type.to_owned(),
                direction: relation.direction,
                rows: vec![row],
            }),
        }
    }
    groups
}

/// Draft of the add-relation modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationDraft {
    pub target_object_id: Option<i64>,
    pub relation_type: String,
    pub description: String,
}

impl RelationDraft {
    pub fn with_type(relation_type: Option<&str>) -> Self {
        Self { relation_type: relation_type.unwrap_or_default().to_owned(), ..Self::default() }
    }

    /// Payload for the add endpoint, or `None` until target and type are set.
    pub fn payload(&self) -> Option<RelationPayload> {
        let target_object_id = self.target_object_id?;
        let relation_type = self.relation_type.trim();
        if relation_type.is_empty() {
            return None;
        }
        let description = self.description.trim();
        Some(RelationPayload {
            target_object_id,
            relation_type: relation_type.to_owned(),
            description: (!description.is_empty()).then(|| description.to_owned()),
        })
    }
}
