//! Rule-driven conversion of entity graphs into nested JSON objects.
//!
//! Campers, activities and signups reference each other in a cycle
//! (camper -> signup -> activity -> signup -> camper ...). Serialization only
//! terminates because every entity declares exclusion rules naming the
//! relationship paths it must not walk back through.
//!
//! A rule is a dotted path relative to the entity being serialized, such as
//! `signups.camper`. At each entity the rules handed down by the caller are
//! merged with the entity's own defaults; the entity then emits its columns in
//! declaration order followed by every relationship that is not excluded, and
//! hands each related entity the rules below that relationship's name.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::server::model::graph::EntityGraph;

/// Set of relationship paths to leave out of serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializeRules {
    excluded: BTreeSet<String>,
}

impl SerializeRules {
    /// Rules that exclude nothing beyond each entity's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules excluding the given dotted paths.
    ///
    /// List endpoints use `SerializeRules::exclude(["signups"])` to return
    /// shallow entities.
    pub fn exclude<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns these rules combined with additional paths.
    pub fn merged(&self, paths: &[&str]) -> Self {
        let mut excluded = self.excluded.clone();
        excluded.extend(paths.iter().map(|p| p.to_string()));
        Self { excluded }
    }

    /// Whether the field directly below the current entity is excluded.
    pub fn excludes(&self, field: &str) -> bool {
        self.excluded.contains(field)
    }

    /// Rules applying to the entities reached through `field`.
    pub fn nested(&self, field: &str) -> Self {
        let prefix = format!("{}.", field);
        Self {
            excluded: self
                .excluded
                .iter()
                .filter_map(|path| path.strip_prefix(&prefix))
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Value of a declared relationship, resolved against an entity graph.
pub enum Relationship<'g> {
    /// Many-to-one reference; `None` when the target is not in the graph.
    One(Option<&'g dyn Serializable>),
    /// One-to-many collection.
    Many(Vec<&'g dyn Serializable>),
}

/// An entity that can be serialized with exclusion rules.
pub trait Serializable {
    /// Paths this entity never re-exposes, relative to itself.
    fn serialize_rules(&self) -> &'static [&'static str];

    /// Column values in declaration order.
    fn columns(&self) -> Vec<(&'static str, Value)>;

    /// Declared relationships in declaration order.
    fn relationships<'g>(&self, graph: &'g EntityGraph) -> Vec<(&'static str, Relationship<'g>)>;

    /// Serializes the entity and, recursively, every relationship the merged
    /// rules leave in place.
    fn to_dict(&self, graph: &EntityGraph, rules: &SerializeRules) -> Map<String, Value> {
        let rules = rules.merged(self.serialize_rules());
        let mut dict = Map::new();

        for (name, value) in self.columns() {
            if !rules.excludes(name) {
                dict.insert(name.to_string(), value);
            }
        }

        for (name, relationship) in self.relationships(graph) {
            if rules.excludes(name) {
                continue;
            }

            let nested = rules.nested(name);
            let value = match relationship {
                Relationship::One(Some(related)) => Value::Object(related.to_dict(graph, &nested)),
                Relationship::One(None) => Value::Null,
                Relationship::Many(related) => Value::Array(
                    related
                        .into_iter()
                        .map(|entity| Value::Object(entity.to_dict(graph, &nested)))
                        .collect(),
                ),
            };
            dict.insert(name.to_string(), value);
        }

        dict
    }
}

/// Serializes each item against the same graph and rules.
pub fn to_list<T: Serializable>(
    items: &[T],
    graph: &EntityGraph,
    rules: &SerializeRules,
) -> Vec<Value> {
    items
        .iter()
        .map(|item| Value::Object(item.to_dict(graph, rules)))
        .collect()
}
