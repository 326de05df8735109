//! Signup factory for creating test signup entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test signups between an existing camper and activity.
///
/// # Example
///
/// ```rust,ignore
/// let signup = SignupFactory::new(&db, camper.id, activity.id).time(14).build().await?;
/// ```
pub struct SignupFactory<'a> {
    db: &'a DatabaseConnection,
    camper_id: i32,
    activity_id: i32,
    time: i32,
}

impl<'a> SignupFactory<'a> {
    /// Creates a new SignupFactory with default values.
    ///
    /// Defaults:
    /// - time: `9`
    pub fn new(db: &'a DatabaseConnection, camper_id: i32, activity_id: i32) -> Self {
        Self {
            db,
            camper_id,
            activity_id,
            time: 9,
        }
    }

    pub fn time(mut self, time: i32) -> Self {
        self.time = time;
        self
    }

    /// Builds and inserts the signup entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::signup::Model)` - Created signup entity
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn build(self) -> Result<entity::signup::Model, DbErr> {
        entity::signup::ActiveModel {
            time: ActiveValue::Set(self.time),
            camper_id: ActiveValue::Set(self.camper_id),
            activity_id: ActiveValue::Set(self.activity_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a signup at the default time for the given camper and activity.
pub async fn create_signup(
    db: &DatabaseConnection,
    camper_id: i32,
    activity_id: i32,
) -> Result<entity::signup::Model, DbErr> {
    SignupFactory::new(db, camper_id, activity_id).build().await
}
