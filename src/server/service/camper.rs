use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use crate::server::{
    data::{camper::CamperRepository, signup::SignupRepository},
    error::AppError,
    extract::JsonObject,
    model::{
        camper::{Camper, CamperDraft},
        graph::{EntityGraph, Loaded},
    },
};

pub struct CamperService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CamperService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all campers ordered by id, without their signups.
    pub async fn get_all(&self) -> Result<Vec<Camper>, AppError> {
        let campers = CamperRepository::new(self.db).get_all().await?;

        Ok(campers)
    }

    /// Gets a camper with its signups and their activities.
    ///
    /// # Returns
    /// - `Ok(Some(Loaded<Camper>))` - Camper found
    /// - `Ok(None)` - No camper with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Loaded<Camper>>, AppError> {
        let Some(camper) = CamperRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(load(self.db, camper).await?))
    }

    /// Creates a camper from a request body.
    ///
    /// Only `name` and `age` may be present and both are required. The row is
    /// inserted inside a transaction which is only committed once the insert
    /// succeeded.
    ///
    /// # Returns
    /// - `Ok(Loaded<Camper>)` - The created camper
    /// - `Err(AppError::Validation)` - Body not an object, or unknown, missing or invalid field
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, body: &JsonObject) -> Result<Loaded<Camper>, AppError> {
        let mut draft = CamperDraft::new();
        draft.apply(body.fields()?)?;
        let params = draft.into_create_params()?;

        let txn = self.db.begin().await?;
        let camper = CamperRepository::new(&txn).create(params).await?;
        let loaded = load(&txn, camper).await?;
        txn.commit().await?;

        tracing::info!(camper_id = loaded.root.id, "created camper");

        Ok(loaded)
    }

    /// Applies a partial update to a camper.
    ///
    /// Fields absent from the body keep their stored value. Supplied fields
    /// are assigned in body order onto a draft copy of the stored camper; the
    /// first failing assignment discards the draft and rolls the transaction
    /// back, so storage is left untouched. The camper is looked up before the
    /// body is read, so a missing id wins over an unreadable body.
    ///
    /// # Returns
    /// - `Ok(Some(Loaded<Camper>))` - The updated camper
    /// - `Ok(None)` - No camper with that id
    /// - `Err(AppError::Validation)` - A supplied field was refused
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        body: &JsonObject,
    ) -> Result<Option<Loaded<Camper>>, AppError> {
        let txn = self.db.begin().await?;
        let repo = CamperRepository::new(&txn);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut draft = CamperDraft::from_camper(&existing);
        draft.apply(body.fields()?)?;
        let params = draft.into_update_params(id)?;

        let camper = repo.update(params).await?;
        let loaded = load(&txn, camper).await?;
        txn.commit().await?;

        tracing::info!(camper_id = id, "updated camper");

        Ok(Some(loaded))
    }

    /// Deletes a camper together with its signups.
    ///
    /// # Returns
    /// - `Ok(true)` - Camper and its signups deleted
    /// - `Ok(false)` - No camper with that id
    // No route deletes campers; the signup cascade lives here for callers outside HTTP.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let signups = SignupRepository::new(&txn).delete_by_camper_id(id).await?;
        if !CamperRepository::new(&txn).delete(id).await? {
            return Ok(false);
        }
        txn.commit().await?;

        tracing::info!(camper_id = id, signups, "deleted camper");

        Ok(true)
    }
}

/// Builds the graph a full camper serializes against: the camper, its
/// signups and the activities those signups point at.
async fn load<C: ConnectionTrait>(db: &C, camper: Camper) -> Result<Loaded<Camper>, AppError> {
    let signups = SignupRepository::new(db)
        .get_by_camper_id_with_activity(camper.id)
        .await?;

    let mut graph = EntityGraph::new();
    for (signup, activity) in signups {
        if let Some(activity) = activity {
            graph.insert_activity(activity);
        }
        graph.insert_signup(signup);
    }
    graph.insert_camper(camper.clone());

    Ok(Loaded {
        root: camper,
        graph,
    })
}
