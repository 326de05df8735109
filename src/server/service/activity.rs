use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{activity::ActivityRepository, signup::SignupRepository},
    error::AppError,
    model::activity::Activity,
};

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all activities ordered by id, without their signups.
    pub async fn get_all(&self) -> Result<Vec<Activity>, AppError> {
        let activities = ActivityRepository::new(self.db).get_all().await?;

        Ok(activities)
    }

    /// Deletes an activity and every signup referencing it in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Activity and its signups deleted
    /// - `Ok(false)` - No activity with that id, nothing changed
    /// - `Err(AppError::DbErr)` - Database error, transaction rolled back
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let activity_repo = ActivityRepository::new(&txn);

        if activity_repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let signups = SignupRepository::new(&txn)
            .delete_by_activity_id(id)
            .await?;
        activity_repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!(activity_id = id, signups, "deleted activity");

        Ok(true)
    }
}
