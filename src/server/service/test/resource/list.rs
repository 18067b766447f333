use super::*;

/// Tests listing never includes another user's resources.
///
/// Expected: Ok with each user seeing only their own servers
#[tokio::test]
async fn lists_only_principal_resources() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::create_server(db, alice.id).await?;
    factory::create_server(db, alice.id).await?;
    let bobs = factory::create_server(db, bob.id).await?;

    let service = ResourceService::<Server>::new(db);

    let for_alice = service.list(alice.id).await?;
    let for_bob = service.list(bob.id).await?;

    assert_eq!(for_alice.len(), 2);
    assert!(for_alice.iter().all(|s| s.user_id == alice.id));
    assert_eq!(for_bob.len(), 1);
    assert_eq!(for_bob[0].id, bobs.id);

    Ok(())
}

/// Tests listing for a user with no resources.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn lists_nothing_for_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let dispatchers = ResourceService::<Dispatcher>::new(db).list(user.id).await?;

    assert!(dispatchers.is_empty());

    Ok(())
}
