use super::*;

/// Tests every operation rejects a request without a logged-in user.
///
/// Expected: 401 for list, get, create, update and delete, and nothing written
#[tokio::test]
async fn rejects_anonymous_requests() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::new(db.clone());

    let owner = factory::create_user(db).await?;
    let dispatcher = factory::create_dispatcher(db, owner.id).await?;

    let statuses = [
        list_resources::<Dispatcher>(State(state.clone()), session.clone())
            .await
            .into_response()
            .status(),
        get_resource::<Dispatcher>(
            State(state.clone()),
            session.clone(),
            Ok(Path(dispatcher.id)),
        )
        .await
        .into_response()
        .status(),
        create_resource::<Dispatcher>(
            State(state.clone()),
            session.clone(),
            Ok(Json(create_dto("X", "http://x", "t1"))),
        )
        .await
        .into_response()
        .status(),
        update_resource::<Dispatcher>(
            State(state.clone()),
            session.clone(),
            Ok(Path(dispatcher.id)),
            Ok(Json(UpdateResourceDto {
                name: Some(Some("Y".to_string())),
                ..Default::default()
            })),
        )
        .await
        .into_response()
        .status(),
        delete_resource::<Dispatcher>(
            State(state.clone()),
            session.clone(),
            Ok(Path(dispatcher.id)),
        )
        .await
        .into_response()
        .status(),
    ];

    assert!(statuses.iter().all(|s| *s == StatusCode::UNAUTHORIZED));

    let rows = ResourceService::<Dispatcher>::new(db)
        .list(owner.id)
        .await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, dispatcher.name);

    Ok(())
}

/// Tests a session whose user was removed is rejected.
///
/// Expected: 401 with the generic message
#[tokio::test]
async fn rejects_stale_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = AppState::new(db.clone());

    AuthSession::new(session).set_user_id(31337).await?;

    let response = list_resources::<Server>(State(state), session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let error: ErrorDto = body_json(response).await;
    assert_eq!(error.msg, "Unauthorized");

    Ok(())
}
