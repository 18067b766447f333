use crate::server::{
    data::resource::ResourceRepository,
    model::resource::{CreateResourceParam, NonBlank, UpdateResourceParam},
};
use entity::prelude::{Dispatcher, Server};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};


fn non_blank(field: &'static str, value: &str) -> NonBlank {
    NonBlank::parse(field, value.to_string()).unwrap()
}

fn create_param(user_id: i32, name: &str, url: &str, token: &str) -> CreateResourceParam {
    CreateResourceParam {
        user_id,
        name: non_blank("name", name),
        url: non_blank("url", url),
        token: non_blank("token", token),
    }
}

fn update_param(id: i32, user_id: i32) -> UpdateResourceParam {
    UpdateResourceParam {
        id,
        user_id,
        name: None,
        url: None,
        token: None,
    }
}
