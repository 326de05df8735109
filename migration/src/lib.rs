pub use sea_orm_migration::prelude::*;

pub mod naming;

mod m20250601_000001_create_activities_table;
mod m20250601_000002_create_campers_table;
mod m20250601_000003_create_signups_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_activities_table::Migration),
            Box::new(m20250601_000002_create_campers_table::Migration),
            Box::new(m20250601_000003_create_signups_table::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::Database;

    #[tokio::test]
    async fn applies_and_reverts_all_migrations() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in ["activities_table", "campers_table", "signups_table"] {
            assert!(manager.has_table(table).await?, "missing table {}", table);
        }
        assert!(
            manager
                .has_index("signups_table", &naming::ix("signups_table", "camper_id"))
                .await?
        );
        assert!(
            manager
                .has_index("signups_table", &naming::ix("signups_table", "activity_id"))
                .await?
        );

        Migrator::down(&db, None).await?;

        assert!(!manager.has_table("signups_table").await?);

        Ok(())
    }
}
