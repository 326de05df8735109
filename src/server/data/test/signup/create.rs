use super::*;

/// Tests inserting a signup between an existing camper and activity.
///
/// Expected: Ok with signup referencing both rows
#[tokio::test]
async fn creates_signup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let activity = factory::create_activity(db).await?;

    let signup = SignupRepository::new(db)
        .create(CreateSignupParams {
            time: 14,
            camper_id: camper.id,
            activity_id: activity.id,
        })
        .await?;

    assert_eq!(signup.time, 14);
    assert_eq!(signup.camper_id, camper.id);
    assert_eq!(signup.activity_id, activity.id);

    let db_signup = entity::prelude::Signup::find_by_id(signup.id).one(db).await?;
    assert!(db_signup.is_some());

    Ok(())
}

/// Tests that the foreign keys refuse a signup for a missing activity.
///
/// Expected: Err and no signup stored
#[tokio::test]
async fn rejects_signup_with_missing_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;

    let result = SignupRepository::new(db)
        .create(CreateSignupParams {
            time: 9,
            camper_id: camper.id,
            activity_id: 999,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 0);

    Ok(())
}

/// Tests that the foreign keys refuse a signup for a missing camper.
///
/// Expected: Err and no signup stored
#[tokio::test]
async fn rejects_signup_with_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let result = SignupRepository::new(db)
        .create(CreateSignupParams {
            time: 9,
            camper_id: 999,
            activity_id: activity.id,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 0);

    Ok(())
}
