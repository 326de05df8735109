use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{constraint::ConstraintError, validation::ValidationError, AppError},
    extract::JsonObject,
    serialize::SerializeRules,
};


/// Wraps a `json!` literal the way the body extractor would.
fn body(value: Value) -> JsonObject {
    JsonObject::from_value(value)
}
