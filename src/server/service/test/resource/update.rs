use super::*;

/// Tests updating through the service with a partial body.
///
/// Expected: Ok(1) with only the name changed
#[tokio::test]
async fn applies_partial_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let server = factory::create_server(db, user.id).await?;

    let param = UpdateResourceParam::from_dto(
        ResourceKind::Server,
        server.id,
        user.id,
        UpdateResourceDto {
            name: Some(Some("Y".to_string())),
            ..Default::default()
        },
    )?;

    let service = ResourceService::<Server>::new(db);
    let rows = service.update(param).await?;

    assert_eq!(rows, 1);

    let updated = service.get(server.id, user.id).await?.unwrap();
    assert_eq!(updated.name, "Y");
    assert_eq!(updated.url, server.url);
    assert_eq!(updated.token, server.token);

    Ok(())
}

/// Tests updating a foreign resource completes without error.
///
/// Expected: Ok(0) and the owner's row is unchanged
#[tokio::test]
async fn foreign_update_is_a_no_op() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let dispatcher = factory::create_dispatcher(db, alice.id).await?;

    let param = UpdateResourceParam::from_dto(
        ResourceKind::Dispatcher,
        dispatcher.id,
        bob.id,
        UpdateResourceDto {
            token: Some(Some("stolen".to_string())),
            ..Default::default()
        },
    )?;

    let service = ResourceService::<Dispatcher>::new(db);
    let rows = service.update(param).await?;

    assert_eq!(rows, 0);

    let unchanged = service.get(dispatcher.id, alice.id).await?.unwrap();
    assert_eq!(unchanged.token, dispatcher.token);

    Ok(())
}
