use axum::{routing::get, Router};
use sea_orm::IntoActiveModel;

use crate::server::{
    controller::resource::{
        create_resource, delete_resource, get_resource, list_resources, update_resource,
    },
    data::resource::ResourceEntity,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<entity::prelude::Dispatcher>())
        .merge(resource_routes::<entity::prelude::Server>())
}

/// Mounts the five resource operations under the kind's collection path.
fn resource_routes<E>() -> Router<AppState>
where
    E: ResourceEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Default + Send,
{
    let collection = E::KIND.path();
    let item = format!("{}/{{id}}", collection);

    Router::new()
        .route(
            collection,
            get(list_resources::<E>).post(create_resource::<E>),
        )
        .route(
            &item,
            get(get_resource::<E>)
                .put(update_resource::<E>)
                .delete(delete_resource::<E>),
        )
}
