use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{activity::ActivityRepository, camper::CamperRepository, signup::SignupRepository},
    error::{constraint::ConstraintError, AppError},
    extract::JsonObject,
    model::{
        graph::{EntityGraph, Loaded},
        signup::{CreateSignupParams, Signup},
    },
};

pub struct SignupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Signs a camper up for an activity.
    ///
    /// Reads `time`, `activity_id` and `camper_id` from the body, then checks
    /// inside the transaction that both referenced rows exist before inserting.
    /// The returned graph holds the camper and activity so the signup
    /// serializes with both nested.
    ///
    /// # Returns
    /// - `Ok(Loaded<Signup>)` - The created signup
    /// - `Err(AppError::Validation)` - Body not an object, or missing, mistyped or out of range field
    /// - `Err(AppError::Constraint)` - Camper or activity does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, body: &JsonObject) -> Result<Loaded<Signup>, AppError> {
        let params = CreateSignupParams::from_body(body.fields()?)?;

        let txn = self.db.begin().await?;

        let camper = CamperRepository::new(&txn)
            .get_by_id(params.camper_id)
            .await?
            .ok_or(ConstraintError::MissingCamper(params.camper_id))?;
        let activity = ActivityRepository::new(&txn)
            .get_by_id(params.activity_id)
            .await?
            .ok_or(ConstraintError::MissingActivity(params.activity_id))?;

        let signup = SignupRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!(
            signup_id = signup.id,
            camper_id = camper.id,
            activity_id = activity.id,
            "created signup"
        );

        let mut graph = EntityGraph::new();
        graph.insert_camper(camper);
        graph.insert_activity(activity);
        graph.insert_signup(signup.clone());

        Ok(Loaded {
            root: signup,
            graph,
        })
    }
}
