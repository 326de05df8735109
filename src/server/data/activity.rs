use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::activity::Activity;

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all activities ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Activity>, DbErr> {
        let entities = entity::prelude::Activity::find()
            .order_by_asc(entity::activity::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Activity::from_entity).collect())
    }

    /// Gets an activity by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Activity>, DbErr> {
        let entity = entity::prelude::Activity::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Activity::from_entity))
    }

    /// Deletes the activity row.
    ///
    /// Signups of the activity must be removed first, see
    /// `SignupRepository::delete_by_activity_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Activity deleted
    /// - `Ok(false)` - No activity with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Activity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
