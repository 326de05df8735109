use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::camper::{Camper, CreateCamperParams, UpdateCamperParams};

pub struct CamperRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CamperRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all campers ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Camper>, DbErr> {
        let entities = entity::prelude::Camper::find()
            .order_by_asc(entity::camper::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Camper::from_entity).collect())
    }

    /// Gets a camper by id.
    ///
    /// # Returns
    /// - `Ok(Some(Camper))` - Camper found
    /// - `Ok(None)` - No camper with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Camper>, DbErr> {
        let entity = entity::prelude::Camper::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Camper::from_entity))
    }

    /// Inserts a camper built from validated parameters.
    pub async fn create(&self, params: CreateCamperParams) -> Result<Camper, DbErr> {
        let entity = entity::camper::ActiveModel {
            name: ActiveValue::Set(params.name),
            age: ActiveValue::Set(params.age),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Camper::from_entity(entity))
    }

    /// Overwrites a camper's assignable fields.
    ///
    /// # Returns
    /// - `Ok(Camper)` - The updated camper
    /// - `Err(DbErr::RecordNotFound)` - No camper with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateCamperParams) -> Result<Camper, DbErr> {
        let camper = entity::prelude::Camper::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Camper with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::camper::ActiveModel = camper.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.age = ActiveValue::Set(params.age);

        let entity = active_model.update(self.db).await?;

        Ok(Camper::from_entity(entity))
    }

    /// Deletes the camper row.
    ///
    /// Signups of the camper must be removed first, see `SignupRepository::delete_by_camper_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Camper deleted
    /// - `Ok(false)` - No camper with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Camper::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
