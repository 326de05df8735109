use super::*;

/// Tests loading a camper's signups together with their activities.
///
/// Verifies that only the camper's own signups are returned, in id order,
/// each paired with its activity.
///
/// Expected: Ok with two (signup, activity) pairs
#[tokio::test]
async fn returns_camper_signups_with_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let other_camper = factory::create_camper(db).await?;
    let archery = factory::create_activity(db).await?;
    let canoeing = factory::create_activity(db).await?;

    let first = factory::create_signup(db, camper.id, archery.id).await?;
    let second = factory::signup::SignupFactory::new(db, camper.id, canoeing.id)
        .time(15)
        .build()
        .await?;
    factory::create_signup(db, other_camper.id, archery.id).await?;

    let signups = SignupRepository::new(db)
        .get_by_camper_id_with_activity(camper.id)
        .await?;

    assert_eq!(signups.len(), 2);
    assert_eq!(signups[0].0.id, first.id);
    assert_eq!(signups[0].1.as_ref().map(|a| a.id), Some(archery.id));
    assert_eq!(signups[1].0.id, second.id);
    assert_eq!(signups[1].0.time, 15);
    assert_eq!(signups[1].1.as_ref().map(|a| a.id), Some(canoeing.id));

    Ok(())
}
