use thiserror::Error;

/// Relational integrity failures detected before a write reaches the database.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// Signup references a camper id with no matching row.
    #[error("Camper {0} does not exist")]
    MissingCamper(i32),

    /// Signup references an activity id with no matching row.
    #[error("Activity {0} does not exist")]
    MissingActivity(i32),
}
