use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_activities_table::{Activity, ACTIVITIES_TABLE},
    m20250601_000002_create_campers_table::{Camper, CAMPERS_TABLE},
};
use crate::naming;

pub const SIGNUPS_TABLE: &str = "signups_table";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Signup::Table)
                    .if_not_exists()
                    .col(pk_auto(Signup::Id))
                    .col(integer(Signup::Time))
                    .col(integer(Signup::CamperId))
                    .col(integer(Signup::ActivityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(naming::fk(SIGNUPS_TABLE, "camper_id", CAMPERS_TABLE))
                            .from(Signup::Table, Signup::CamperId)
                            .to(Camper::Table, Camper::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(naming::fk(SIGNUPS_TABLE, "activity_id", ACTIVITIES_TABLE))
                            .from(Signup::Table, Signup::ActivityId)
                            .to(Activity::Table, Activity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(naming::ix(SIGNUPS_TABLE, "camper_id"))
                    .table(Signup::Table)
                    .col(Signup::CamperId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(naming::ix(SIGNUPS_TABLE, "activity_id"))
                    .table(Signup::Table)
                    .col(Signup::ActivityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Signup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Signup {
    #[sea_orm(iden = "signups_table")]
    Table,
    Id,
    Time,
    CamperId,
    ActivityId,
}
