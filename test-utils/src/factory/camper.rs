//! Camper factory for creating test camper entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test campers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let camper = CamperFactory::new(&db).name("Alex").age(12).build().await?;
/// ```
pub struct CamperFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    age: i32,
}

impl<'a> CamperFactory<'a> {
    /// Creates a new CamperFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Camper {id}"` where id is auto-incremented
    /// - age: `12`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Camper {}", id),
            age: 12,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Builds and inserts the camper entity into the database.
    ///
    /// Inserts the row directly, bypassing the application's field validators.
    ///
    /// # Returns
    /// - `Ok(entity::camper::Model)` - Created camper entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::camper::Model, DbErr> {
        entity::camper::ActiveModel {
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a camper with default values.
///
/// Shorthand for `CamperFactory::new(db).build().await`.
pub async fn create_camper(db: &DatabaseConnection) -> Result<entity::camper::Model, DbErr> {
    CamperFactory::new(db).build().await
}
