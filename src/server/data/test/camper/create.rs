use super::*;

/// Tests inserting a camper from validated parameters.
///
/// Verifies that the repository returns the generated id and that the row
/// is stored with the given name and age.
///
/// Expected: Ok with camper created
#[tokio::test]
async fn creates_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let camper = repo
        .create(CreateCamperParams {
            name: "Alex".to_string(),
            age: 12,
        })
        .await?;

    assert!(camper.id > 0);
    assert_eq!(camper.name, "Alex");
    assert_eq!(camper.age, 12);

    let db_camper = entity::prelude::Camper::find_by_id(camper.id).one(db).await?;
    assert!(db_camper.is_some());
    assert_eq!(db_camper.unwrap().name, "Alex");

    Ok(())
}

/// Tests that consecutive inserts receive distinct ids.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn generates_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let first = repo
        .create(CreateCamperParams {
            name: "Alex".to_string(),
            age: 12,
        })
        .await?;
    let second = repo
        .create(CreateCamperParams {
            name: "Alex".to_string(),
            age: 12,
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
