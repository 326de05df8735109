//! Activity domain model and serialization rules.

use serde_json::{json, Value};

use crate::server::{
    model::graph::EntityGraph,
    serialize::{Relationship, Serializable},
};

/// Activity as stored in `activities_table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: i32,
    pub name: String,
    pub difficulty: i32,
}

impl Activity {
    /// Converts an entity model to an activity domain model at the repository boundary.
    pub fn from_entity(entity: entity::activity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            difficulty: entity.difficulty,
        }
    }
}

impl Serializable for Activity {
    fn serialize_rules(&self) -> &'static [&'static str] {
        &["signups.activity"]
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", json!(self.id)),
            ("name", json!(self.name)),
            ("difficulty", json!(self.difficulty)),
        ]
    }

    fn relationships<'g>(&self, graph: &'g EntityGraph) -> Vec<(&'static str, Relationship<'g>)> {
        let signups = graph
            .signups_of_activity(self.id)
            .into_iter()
            .map(|signup| signup as &dyn Serializable)
            .collect();

        vec![("signups", Relationship::Many(signups))]
    }
}
