use super::*;

/// Tests overwriting a camper's fields.
///
/// Expected: Ok with updated values persisted
#[tokio::test]
async fn updates_camper_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_camper(db).await?;

    let camper = CamperRepository::new(db)
        .update(UpdateCamperParams {
            id: created.id,
            name: "Renamed".to_string(),
            age: 17,
        })
        .await?;

    assert_eq!(camper.name, "Renamed");
    assert_eq!(camper.age, 17);

    let db_camper = entity::prelude::Camper::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_camper.name, "Renamed");
    assert_eq!(db_camper.age, 17);

    Ok(())
}

/// Tests updating a camper id that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CamperRepository::new(db)
        .update(UpdateCamperParams {
            id: 999,
            name: "Nobody".to_string(),
            age: 10,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
