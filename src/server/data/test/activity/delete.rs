use super::*;

/// Tests deleting an activity without signups.
///
/// Expected: Ok(true) and row removed
#[tokio::test]
async fn deletes_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_activity(db).await?;

    let deleted = ActivityRepository::new(db).delete(created.id).await?;

    assert!(deleted);
    let db_activity = entity::prelude::Activity::find_by_id(created.id)
        .one(db)
        .await?;
    assert!(db_activity.is_none());

    Ok(())
}

/// Tests deleting an activity id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ActivityRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests the foreign key cascade when an activity row is deleted directly.
///
/// The repository only removes the activity row; `ON DELETE CASCADE` on
/// `signups_table.activity_id` must remove the signups that reference it.
///
/// Expected: Ok(true), the activity's signups gone, other signups kept
#[tokio::test]
async fn foreign_key_cascades_to_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let archery = factory::create_activity(db).await?;
    let swimming = factory::create_activity(db).await?;
    factory::create_signup(db, camper.id, archery.id).await?;
    factory::create_signup(db, camper.id, archery.id).await?;
    let kept = factory::create_signup(db, camper.id, swimming.id).await?;

    let deleted = ActivityRepository::new(db).delete(archery.id).await?;

    assert!(deleted);
    let remaining = entity::prelude::Signup::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
    assert_eq!(entity::prelude::Camper::find().count(db).await?, 1);

    Ok(())
}
