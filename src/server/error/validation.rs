use thiserror::Error;

/// Field-level validation failures raised while assigning request values onto
/// an entity.
///
/// The display text is returned to the client verbatim, so messages are written
/// for API consumers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Camper age outside of the accepted 8..=18 range.
    #[error("Age must be between 8 and 18")]
    AgeOutOfRange,

    /// Signup time outside of the hours of a day.
    #[error("Time must be between 0 and 23")]
    TimeOutOfRange,

    /// A required field was omitted or set to null.
    #[error("Field '{0}' is required")]
    MissingField(String),

    /// A field was present with a JSON value of the wrong type.
    #[error("Field '{field}' must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    /// The request tried to assign a field outside of the entity's whitelist.
    #[error("Unknown or read-only field '{0}'")]
    UnknownField(String),

    /// The request body parsed as JSON but is not an object.
    #[error("Request body must be a JSON object")]
    NotAnObject,

    /// The request body could not be read as JSON.
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),
}
