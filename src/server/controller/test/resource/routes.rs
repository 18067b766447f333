use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use super::*;
use crate::server::{config::Config, router::router, startup};

/// Builds the full application router with the production session layer.
async fn app(db: &DatabaseConnection) -> Result<Router, AppError> {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        sql_log_level: log::LevelFilter::Off,
        bind_address: "127.0.0.1:0".to_string(),
        session_inactivity_days: 7,
    };
    let session_layer = startup::connect_to_session(db, &config).await?;

    Ok(router()
        .with_state(AppState::new(db.clone()))
        .layer(session_layer))
}

fn request(method: Method, uri: &str, cookie: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, cookie);

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Tests every route of both kinds end to end through the router and session cookie.
///
/// Expected: 200 create, 200 list, 200 get, 204 update, 204 delete, 404 get, per kind
#[tokio::test]
async fn serves_every_route_for_both_kinds() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;
    session.save().await?;
    let cookie = format!("id={}", session.id().unwrap());

    let app = app(db).await?;

    for collection in ["/dispatchers", "/servers"] {
        let response = app
            .clone()
            .oneshot(request(
                Method::POST,
                collection,
                &cookie,
                Some(r#"{"name":"X","url":"http://x","token":"t1"}"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created: ResourceDto = body_json(response).await;
        assert_eq!(created.user_id, user.id);
        let item = format!("{}/{}", collection, created.id);

        let response = app
            .clone()
            .oneshot(request(Method::GET, collection, &cookie, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed: Vec<ResourceDto> = body_json(response).await;
        assert_eq!(listed.len(), 1);

        let response = app
            .clone()
            .oneshot(request(
                Method::PUT,
                &item,
                &cookie,
                Some(r#"{"name":"Y"}"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(request(Method::GET, &item, &cookie, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: ResourceDto = body_json(response).await;
        assert_eq!(fetched.name, "Y");
        assert_eq!(fetched.url, "http://x");

        let response = app
            .clone()
            .oneshot(request(Method::DELETE, &item, &cookie, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(request(Method::GET, &item, &cookie, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    Ok(())
}

/// Tests malformed client input is reported as 412.
///
/// Expected: 412 for a non-integer path ID, a broken JSON body and an explicit null
#[tokio::test]
async fn maps_malformed_input_to_precondition_failed() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;
    session.save().await?;
    let cookie = format!("id={}", session.id().unwrap());
    let dispatcher = factory::create_dispatcher(db, user.id).await?;

    let app = app(db).await?;

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/dispatchers/abc", &cookie, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    let error: ErrorDto = body_json(response).await;
    assert!(error.msg.contains("abc"));

    let response = app
        .clone()
        .oneshot(request(Method::POST, "/servers", &cookie, Some("{bad")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);

    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            &format!("/dispatchers/{}", dispatcher.id),
            &cookie,
            Some(r#"{"name":null}"#),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    let error: ErrorDto = body_json(response).await;
    assert_eq!(error.msg, "Dispatcher.name cannot be null");

    let servers = ResourceService::<Server>::new(db).list(user.id).await?;
    assert!(servers.is_empty());

    Ok(())
}

/// Tests a request without a session cookie is rejected by the router.
///
/// Expected: 401
#[tokio::test]
async fn rejects_request_without_cookie() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_resource_tables()
        .build()
        .await
        .unwrap();
    let db = test.database().await.unwrap();

    let app = app(db).await?;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/servers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
