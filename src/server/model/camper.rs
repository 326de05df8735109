//! Camper domain model, field whitelist and serialization rules.

use serde_json::{json, Map, Value};

use crate::server::{
    error::validation::ValidationError,
    model::{field, graph::EntityGraph},
    serialize::{Relationship, Serializable},
};

/// Camper as stored in `campers_table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camper {
    pub id: i32,
    pub name: String,
    /// Always within `MIN_AGE..=MAX_AGE`.
    pub age: i32,
}

impl Camper {
    pub const MIN_AGE: i64 = 8;
    pub const MAX_AGE: i64 = 18;

    /// Converts an entity model to a camper domain model at the repository boundary.
    pub fn from_entity(entity: entity::camper::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
        }
    }

    /// Validator run on every assignment of `age`.
    ///
    /// # Returns
    /// - `Ok(i32)` - The accepted age
    /// - `Err(ValidationError::AgeOutOfRange)` - Age outside 8..=18
    pub fn validate_age(age: i64) -> Result<i32, ValidationError> {
        if (Self::MIN_AGE..=Self::MAX_AGE).contains(&age) {
            Ok(age as i32)
        } else {
            Err(ValidationError::AgeOutOfRange)
        }
    }
}

impl Serializable for Camper {
    fn serialize_rules(&self) -> &'static [&'static str] {
        &["signups.camper"]
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", json!(self.id)),
            ("name", json!(self.name)),
            ("age", json!(self.age)),
        ]
    }

    fn relationships<'g>(&self, graph: &'g EntityGraph) -> Vec<(&'static str, Relationship<'g>)> {
        let signups = graph
            .signups_of_camper(self.id)
            .into_iter()
            .map(|signup| signup as &dyn Serializable)
            .collect();

        vec![("signups", Relationship::Many(signups))]
    }
}

/// Parameters for inserting a validated camper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCamperParams {
    pub name: String,
    pub age: i32,
}

/// Parameters for overwriting a camper's assignable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCamperParams {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// Assignable camper fields accumulated from a request body.
///
/// Only `name` and `age` may be assigned; each assignment is coerced and
/// validated on the spot. Patches start from the stored camper so omitted
/// fields keep their values, and since the draft is a copy a failed
/// assignment never touches the stored row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CamperDraft {
    name: Option<String>,
    age: Option<i32>,
}

impl CamperDraft {
    /// Empty draft for a camper that does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled with an existing camper's values.
    pub fn from_camper(camper: &Camper) -> Self {
        Self {
            name: Some(camper.name.clone()),
            age: Some(camper.age),
        }
    }

    /// Assigns a single request field.
    ///
    /// # Returns
    /// - `Ok(())` - Field accepted
    /// - `Err(ValidationError)` - Unknown field, wrong JSON type or validator failure
    pub fn assign(&mut self, key: &str, value: &Value) -> Result<(), ValidationError> {
        match key {
            "name" => self.name = Some(field::required_string(key, value)?),
            "age" => {
                let age = field::required_integer(key, value)?;
                self.age = Some(Camper::validate_age(age)?);
            }
            _ => return Err(ValidationError::UnknownField(key.to_string())),
        }

        Ok(())
    }

    /// Assigns every field of a request body in the order the client sent them,
    /// stopping at the first failure.
    pub fn apply(&mut self, body: &Map<String, Value>) -> Result<(), ValidationError> {
        for (key, value) in body {
            self.assign(key, value)?;
        }

        Ok(())
    }

    pub fn into_create_params(self) -> Result<CreateCamperParams, ValidationError> {
        let (name, age) = self.into_fields()?;

        Ok(CreateCamperParams { name, age })
    }

    pub fn into_update_params(self, id: i32) -> Result<UpdateCamperParams, ValidationError> {
        let (name, age) = self.into_fields()?;

        Ok(UpdateCamperParams { id, name, age })
    }

    fn into_fields(self) -> Result<(String, i32), ValidationError> {
        let name = self
            .name
            .ok_or_else(|| ValidationError::MissingField("name".to_string()))?;
        let age = self
            .age
            .ok_or_else(|| ValidationError::MissingField("age".to_string()))?;

        Ok((name, age))
    }
}
