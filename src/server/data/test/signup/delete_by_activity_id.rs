use super::*;

/// Tests removing every signup of one activity.
///
/// Expected: Ok with the activity's signups removed and others kept
#[tokio::test]
async fn deletes_only_the_activitys_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let archery = factory::create_activity(db).await?;
    let swimming = factory::create_activity(db).await?;
    factory::create_signup(db, camper.id, archery.id).await?;
    factory::create_signup(db, camper.id, archery.id).await?;
    factory::create_signup(db, camper.id, swimming.id).await?;

    let removed = SignupRepository::new(db)
        .delete_by_activity_id(archery.id)
        .await?;

    assert_eq!(removed, 2);
    let remaining = entity::prelude::Signup::find()
        .filter(entity::signup::Column::ActivityId.eq(swimming.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 1);

    Ok(())
}

/// Tests that nothing is removed for an activity without signups.
///
/// Expected: Ok(0)
#[tokio::test]
async fn removes_nothing_without_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let removed = SignupRepository::new(db)
        .delete_by_activity_id(activity.id)
        .await?;

    assert_eq!(removed, 0);

    Ok(())
}
