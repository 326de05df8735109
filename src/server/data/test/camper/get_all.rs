use super::*;

/// Tests listing campers in id order.
///
/// Expected: Ok with every camper returned
#[tokio::test]
async fn returns_all_campers_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_camper(db).await?;
    let second = factory::create_camper(db).await?;

    let campers = CamperRepository::new(db).get_all().await?;

    let ids: Vec<i32> = campers.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing when no campers exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_campers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let campers = CamperRepository::new(db).get_all().await?;

    assert!(campers.is_empty());

    Ok(())
}
