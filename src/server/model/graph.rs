//! In-memory entity graph used for relationship navigation and serialization.
//!
//! Services load the rows a response needs into an `EntityGraph`; relationships
//! are then resolved by id lookups instead of lazy database access.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::server::{
    model::{activity::Activity, camper::Camper, signup::Signup},
    serialize::{SerializeRules, Serializable},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityGraph {
    campers: BTreeMap<i32, Camper>,
    activities: BTreeMap<i32, Activity>,
    signups: BTreeMap<i32, Signup>,
}

impl EntityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_camper(&mut self, camper: Camper) {
        self.campers.insert(camper.id, camper);
    }

    pub fn insert_activity(&mut self, activity: Activity) {
        self.activities.insert(activity.id, activity);
    }

    pub fn insert_signup(&mut self, signup: Signup) {
        self.signups.insert(signup.id, signup);
    }

    pub fn camper(&self, id: i32) -> Option<&Camper> {
        self.campers.get(&id)
    }

    pub fn activity(&self, id: i32) -> Option<&Activity> {
        self.activities.get(&id)
    }

    /// Signups of a camper, ordered by signup id.
    pub fn signups_of_camper(&self, camper_id: i32) -> Vec<&Signup> {
        self.signups
            .values()
            .filter(|signup| signup.camper_id == camper_id)
            .collect()
    }

    /// Signups of an activity, ordered by signup id.
    pub fn signups_of_activity(&self, activity_id: i32) -> Vec<&Signup> {
        self.signups
            .values()
            .filter(|signup| signup.activity_id == activity_id)
            .collect()
    }

    /// Campers reached through an activity's signups, one entry per signup.
    pub fn campers_of_activity(&self, activity_id: i32) -> Vec<&Camper> {
        self.signups_of_activity(activity_id)
            .into_iter()
            .filter_map(|signup| self.camper(signup.camper_id))
            .collect()
    }

    /// Activities reached through a camper's signups, one entry per signup.
    pub fn activities_of_camper(&self, camper_id: i32) -> Vec<&Activity> {
        self.signups_of_camper(camper_id)
            .into_iter()
            .filter_map(|signup| self.activity(signup.activity_id))
            .collect()
    }
}

/// An entity together with the graph its relationships resolve against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    pub root: T,
    pub graph: EntityGraph,
}

impl<T: Serializable> Loaded<T> {
    pub fn to_dict(&self, rules: &SerializeRules) -> Map<String, Value> {
        self.root.to_dict(&self.graph, rules)
    }
}
