use super::*;

/// Tests fetching an existing camper.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camper::CamperFactory::new(db)
        .name("Caitlin")
        .age(11)
        .build()
        .await?;

    let camper = CamperRepository::new(db).get_by_id(created.id).await?;

    let camper = camper.unwrap();
    assert_eq!(camper.id, created.id);
    assert_eq!(camper.name, "Caitlin");
    assert_eq!(camper.age, 11);

    Ok(())
}

/// Tests fetching a camper id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = CamperRepository::new(db).get_by_id(999).await?;

    assert!(camper.is_none());

    Ok(())
}
