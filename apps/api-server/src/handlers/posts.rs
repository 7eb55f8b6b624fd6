//! Post handlers.

use actix_web::{HttpResponse, web};

use postboard_core::DomainError;
use postboard_core::domain::NewPost;
use postboard_core::relations::{populate_comments, populate_post_comments};
use postboard_shared::dto::CreatePostRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /posts - every post with its comments populated.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let populated = populate_comments(state.comments.as_ref(), posts).await?;

    tracing::debug!(count = populated.len(), "Listed posts");
    Ok(HttpResponse::Ok().json(populated))
}

/// GET /posts/{id}
pub async fn get_single_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(&id)
        .await?
        .ok_or_else(|| DomainError::not_found("post", &id))?;
    let populated = populate_post_comments(state.comments.as_ref(), post).await?;

    Ok(HttpResponse::Ok().json(populated))
}

/// POST /posts
///
/// The body goes to the store untouched; its required-field checks are the
/// only validation.
pub async fn add_new_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(NewPost {
            user_name: req.user_name,
            post_text: req.post_text,
        })
        .await?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(post))
}
