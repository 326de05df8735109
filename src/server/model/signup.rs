//! Signup domain model, request coercion and serialization rules.

use serde_json::{json, Map, Value};

use crate::server::{
    error::validation::ValidationError,
    model::{field, graph::EntityGraph},
    serialize::{Relationship, Serializable},
};

/// Signup as stored in `signups_table`, joining one camper to one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    pub id: i32,
    /// Hour of the day, always within `0..=23`.
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
}

impl Signup {
    pub const FIRST_HOUR: i64 = 0;
    pub const LAST_HOUR: i64 = 23;

    /// Converts an entity model to a signup domain model at the repository boundary.
    pub fn from_entity(entity: entity::signup::Model) -> Self {
        Self {
            id: entity.id,
            time: entity.time,
            camper_id: entity.camper_id,
            activity_id: entity.activity_id,
        }
    }

    /// Validator run on every assignment of `time`.
    ///
    /// # Returns
    /// - `Ok(i32)` - The accepted hour
    /// - `Err(ValidationError::TimeOutOfRange)` - Time outside 0..=23
    pub fn validate_time(time: i64) -> Result<i32, ValidationError> {
        if (Self::FIRST_HOUR..=Self::LAST_HOUR).contains(&time) {
            Ok(time as i32)
        } else {
            Err(ValidationError::TimeOutOfRange)
        }
    }
}

impl Serializable for Signup {
    fn serialize_rules(&self) -> &'static [&'static str] {
        &["activity.signups", "camper.signups"]
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", json!(self.id)),
            ("time", json!(self.time)),
            ("camper_id", json!(self.camper_id)),
            ("activity_id", json!(self.activity_id)),
        ]
    }

    fn relationships<'g>(&self, graph: &'g EntityGraph) -> Vec<(&'static str, Relationship<'g>)> {
        vec![
            (
                "camper",
                Relationship::One(
                    graph
                        .camper(self.camper_id)
                        .map(|camper| camper as &dyn Serializable),
                ),
            ),
            (
                "activity",
                Relationship::One(
                    graph
                        .activity(self.activity_id)
                        .map(|activity| activity as &dyn Serializable),
                ),
            ),
        ]
    }
}

/// Parameters for inserting a signup whose time has been validated.
///
/// The referenced camper and activity are checked by the service inside the
/// insert's transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSignupParams {
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
}

impl CreateSignupParams {
    /// Reads `time`, `activity_id` and `camper_id` from a request body.
    ///
    /// Other keys are ignored. `time` is validated first so an invalid hour is
    /// reported even when the references are also wrong.
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let time = field::required_integer("time", body.get("time").unwrap_or(&Value::Null))?;
        let time = Signup::validate_time(time)?;
        let activity_id =
            field::required_id("activity_id", body.get("activity_id").unwrap_or(&Value::Null))?;
        let camper_id =
            field::required_id("camper_id", body.get("camper_id").unwrap_or(&Value::Null))?;

        Ok(Self {
            time,
            camper_id,
            activity_id,
        })
    }
}
