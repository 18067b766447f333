use super::*;

/// Tests owner fields in the request body are ignored.
///
/// Expected: 200 with the row owned by the principal, not by the user named in the body
#[tokio::test]
async fn stamps_principal_as_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::new(db.clone());

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(alice.id).await?;

    let payload: CreateResourceDto = serde_json::from_value(serde_json::json!({
        "name": "edge",
        "url": "http://edge",
        "token": "s1",
        "user_id": bob.id,
        "owner_id": bob.id,
    }))
    .unwrap();

    let response = create_resource::<Server>(State(state), session.clone(), Ok(Json(payload)))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let created: ResourceDto = body_json(response).await;
    assert_eq!(created.user_id, alice.id);
    assert_eq!(created.name, "edge");

    Ok(())
}

/// Tests each blank field is rejected individually.
///
/// Expected: 412 naming the blank field, and no row created
#[tokio::test]
async fn rejects_each_blank_field() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::new(db.clone());

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let cases = [
        (create_dto("", "http://x", "t1"), "Validation notEmpty on name failed"),
        (create_dto("X", "   ", "t1"), "Validation notEmpty on url failed"),
        (create_dto("X", "http://x", ""), "Validation notEmpty on token failed"),
    ];

    for (payload, expected) in cases {
        let response =
            create_resource::<Dispatcher>(State(state.clone()), session.clone(), Ok(Json(payload)))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
        let error: ErrorDto = body_json(response).await;
        assert_eq!(error.msg, expected);
    }

    let rows = ResourceService::<Dispatcher>::new(db).list(user.id).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests a missing field is rejected with the kind in the message.
///
/// Expected: 412 with "Server.token cannot be null"
#[tokio::test]
async fn rejects_missing_field() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::new(db.clone());

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let payload = CreateResourceDto {
        name: Some("edge".to_string()),
        url: Some("http://edge".to_string()),
        token: None,
    };

    let response = create_resource::<Server>(State(state), session.clone(), Ok(Json(payload)))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    let error: ErrorDto = body_json(response).await;
    assert_eq!(error.msg, "Server.token cannot be null");

    Ok(())
}
