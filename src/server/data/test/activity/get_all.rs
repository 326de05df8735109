use super::*;

/// Tests listing activities in id order.
///
/// Expected: Ok with every activity returned
#[tokio::test]
async fn returns_all_activities_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let archery = factory::activity::ActivityFactory::new(db)
        .name("Archery")
        .difficulty(3)
        .build()
        .await?;
    let swimming = factory::activity::ActivityFactory::new(db)
        .name("Swimming")
        .difficulty(2)
        .build()
        .await?;

    let activities = ActivityRepository::new(db).get_all().await?;

    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].id, archery.id);
    assert_eq!(activities[0].name, "Archery");
    assert_eq!(activities[1].id, swimming.id);
    assert_eq!(activities[1].difficulty, 2);

    Ok(())
}
