//! HTTP handlers for dispatchers and servers.
//!
//! Each handler is generic over the resource entity and is mounted once per kind by the
//! router. Every handler resolves the principal through `AuthGuard` before touching
//! the path, the body or the store.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::IntoActiveModel;
use tower_sessions::Session;

use crate::{
    model::resource::{CreateResourceDto, ResourceDto, UpdateResourceDto},
    server::{
        data::resource::ResourceEntity,
        error::AppError,
        middleware::auth::AuthGuard,
        model::resource::{CreateResourceParam, UpdateResourceParam},
        service::resource::ResourceService,
        state::AppState,
    },
};

/// Lists the principal's resources.
///
/// # Returns
/// - 200 OK with every resource owned by the principal, possibly empty
/// - 401 Unauthorized when no valid user is in the session
pub async fn list_resources<E>(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError>
where
    E: ResourceEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Default + Send,
{
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let resources = ResourceService::<E>::new(&state.db).list(user.id).await?;

    let dtos: Vec<ResourceDto> = resources.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Gets one of the principal's resources.
///
/// A resource owned by another user yields the same 404 as a missing one.
///
/// # Returns
/// - 200 OK with the resource
/// - 401 Unauthorized when no valid user is in the session
/// - 404 Not Found when the principal owns no resource with this ID
/// - 412 Precondition Failed when the ID is not an integer
pub async fn get_resource<E>(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError>
where
    E: ResourceEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Default + Send,
{
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let Path(id) = path?;

    let resource = ResourceService::<E>::new(&state.db)
        .get(id, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} not found", E::KIND)))?;

    Ok((StatusCode::OK, Json(resource.into_dto())))
}

/// Registers a new resource owned by the principal.
///
/// Owner fields supplied in the body are ignored.
///
/// # Returns
/// - 200 OK with the created resource including its ID and owner
/// - 401 Unauthorized when no valid user is in the session
/// - 412 Precondition Failed when a field is missing or blank, the body is not valid
///   JSON, or the store rejects the row
pub async fn create_resource<E>(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateResourceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    E: ResourceEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Default + Send,
{
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let Json(payload) = payload?;

    let param = CreateResourceParam::from_dto(E::KIND, user.id, payload)?;

    let resource = ResourceService::<E>::new(&state.db).create(param).await?;

    Ok((StatusCode::OK, Json(resource.into_dto())))
}

/// Updates one of the principal's resources.
///
/// Updating a missing or foreign resource changes nothing and still succeeds.
///
/// # Returns
/// - 204 No Content
/// - 401 Unauthorized when no valid user is in the session
/// - 412 Precondition Failed when a supplied field is null or blank, or the input is malformed
pub async fn update_resource<E>(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateResourceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    E: ResourceEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Default + Send,
{
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let Path(id) = path?;
    let Json(payload) = payload?;

    let param = UpdateResourceParam::from_dto(E::KIND, id, user.id, payload)?;

    ResourceService::<E>::new(&state.db).update(param).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes one of the principal's resources.
///
/// Deleting a missing or foreign resource changes nothing and still succeeds.
///
/// # Returns
/// - 204 No Content
/// - 401 Unauthorized when no valid user is in the session
/// - 412 Precondition Failed when the ID is not an integer
pub async fn delete_resource<E>(
    State(state): State<AppState>,
    session: Session,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError>
where
    E: ResourceEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Default + Send,
{
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let Path(id) = path?;

    ResourceService::<E>::new(&state.db).delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
