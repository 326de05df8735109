use crate::server::{data::signup::SignupRepository, model::signup::CreateSignupParams};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_activity_id;
mod delete_by_camper_id;
mod get_by_camper_id_with_activity;
