use super::*;

/// Tests deleting a camper without signups.
///
/// Expected: Ok(true) and row removed
#[tokio::test]
async fn deletes_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_camper(db).await?;

    let deleted = CamperRepository::new(db).delete(created.id).await?;

    assert!(deleted);
    let db_camper = entity::prelude::Camper::find_by_id(created.id).one(db).await?;
    assert!(db_camper.is_none());

    Ok(())
}

/// Tests deleting a camper id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CamperRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests the foreign key cascade when a camper row is deleted directly.
///
/// Expected: Ok(true) and the camper's signups removed by the database
#[tokio::test]
async fn foreign_key_cascades_to_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camper, _, _) = factory::create_signup_with_dependencies(db).await?;

    let deleted = CamperRepository::new(db).delete(camper.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Activity::find().count(db).await?, 1);

    Ok(())
}
