use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use posty_core::server::payload::create_post_request::CreatePostRequest;
use posty_core::server::payload::generate_post_request::GeneratePostRequest;
use posty_core::server::payload::generate_post_response::GeneratePostResponse;
use serde_json::json;
use std::sync::Arc;

pub async fn generate_post_handler(
    State(state): State<Arc<AppState>>,
    req: std::result::Result<Json<GeneratePostRequest>, JsonRejection>,
) -> ResultAPI {
    let req = req?.0;
    let responses = state.use_case_generate_post.generate(req).await?;
    Ok(Json(json!(GeneratePostResponse { responses })))
}

pub async fn create_post_handler(
    State(state): State<Arc<AppState>>,
    req: std::result::Result<Json<CreatePostRequest>, JsonRejection>,
) -> ResultAPI {
    let req = req?.0;
    let post = state.service_post.handle_create(req).await?;
    Ok(Json(json!(post)))
}

pub async fn get_post_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ResultAPI {
    let post = state.service_post.get_post(&id).await?;
    Ok(Json(json!(post)))
}

pub async fn list_posts_handler(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ResultAPI {
    let posts = state.service_post.list_posts(&user_id).await?;
    Ok(Json(json!(posts)))
}
