use super::*;

/// Tests fetching an existing activity and a missing one.
///
/// Expected: Ok(Some) for the existing id, Ok(None) otherwise
#[tokio::test]
async fn finds_activity_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_activity(db).await?;
    let repo = ActivityRepository::new(db);

    let found = repo.get_by_id(created.id).await?;
    assert_eq!(found.map(|a| a.name), Some(created.name));

    let missing = repo.get_by_id(created.id + 1).await?;
    assert!(missing.is_none());

    Ok(())
}
