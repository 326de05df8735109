use super::*;

/// Tests removing every signup of one camper.
///
/// Expected: Ok with the camper's signups removed and others kept
#[tokio::test]
async fn deletes_only_the_campers_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camper, activity, _) = factory::create_signup_with_dependencies(db).await?;
    factory::create_signup(db, camper.id, activity.id).await?;
    let other_camper = factory::create_camper(db).await?;
    factory::create_signup(db, other_camper.id, activity.id).await?;

    let removed = SignupRepository::new(db)
        .delete_by_camper_id(camper.id)
        .await?;

    assert_eq!(removed, 2);
    let remaining = entity::prelude::Signup::find()
        .filter(entity::signup::Column::CamperId.eq(camper.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 1);

    Ok(())
}
