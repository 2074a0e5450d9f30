use crate::interfaces::post::controller::{
    create_post_handler, generate_post_handler, get_post_handler, list_posts_handler,
};
use crate::server::app_state::AppState;
use axum::routing::{get, post};
use posty_core::server::routes::BackendApiPost;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendApiPost::Generate.path(None).as_str(),
            post(generate_post_handler),
        )
        .route(
            BackendApiPost::Create.path(None).as_str(),
            post(create_post_handler),
        )
        .route(
            BackendApiPost::Get.path(None).as_str(),
            get(get_post_handler),
        )
        .route(
            BackendApiPost::ListByUser.path(None).as_str(),
            get(list_posts_handler),
        )
}
