use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    activity::Activity,
    signup::{CreateSignupParams, Signup},
};

pub struct SignupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SignupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a signup.
    ///
    /// The caller checks that the camper and activity exist; the foreign keys
    /// reject the insert otherwise.
    pub async fn create(&self, params: CreateSignupParams) -> Result<Signup, DbErr> {
        let entity = entity::signup::ActiveModel {
            time: ActiveValue::Set(params.time),
            camper_id: ActiveValue::Set(params.camper_id),
            activity_id: ActiveValue::Set(params.activity_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Signup::from_entity(entity))
    }

    /// Gets a camper's signups ordered by id, each with its activity.
    pub async fn get_by_camper_id_with_activity(
        &self,
        camper_id: i32,
    ) -> Result<Vec<(Signup, Option<Activity>)>, DbErr> {
        let results = entity::prelude::Signup::find()
            .filter(entity::signup::Column::CamperId.eq(camper_id))
            .order_by_asc(entity::signup::Column::Id)
            .find_also_related(entity::prelude::Activity)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(signup, activity)| {
                (
                    Signup::from_entity(signup),
                    activity.map(Activity::from_entity),
                )
            })
            .collect())
    }

    /// Deletes every signup of a camper.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of signups removed
    pub async fn delete_by_camper_id(&self, camper_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Signup::delete_many()
            .filter(entity::signup::Column::CamperId.eq(camper_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every signup of an activity.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of signups removed
    pub async fn delete_by_activity_id(&self, activity_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Signup::delete_many()
            .filter(entity::signup::Column::ActivityId.eq(activity_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
