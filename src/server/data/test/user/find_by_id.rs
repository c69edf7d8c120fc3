use super::*;

/// Tests finding users by id, present and absent.
///
/// Expected: Ok(Some) for the created user, Ok(None) for an unused id
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_id(created.id).await?;
    assert_eq!(found, Some(created.clone()));

    let missing = repo.find_by_id(created.id + 1000).await?;
    assert!(missing.is_none());

    Ok(())
}
