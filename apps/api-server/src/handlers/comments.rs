//! Comment handlers.

use actix_web::{HttpResponse, web};

use postboard_core::DomainError;
use postboard_core::domain::NewComment;
use postboard_core::relations::populate_comment_post;
use postboard_shared::dto::CreateCommentRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /comments/{commentid} - the comment with its post populated.
pub async fn get_single_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let comment_id = path.into_inner();

    let comment = state
        .comments
        .find_by_id(&comment_id)
        .await?
        .ok_or_else(|| DomainError::not_found("comment", &comment_id))?;
    let populated = populate_comment_post(state.posts.as_ref(), comment).await?;

    Ok(HttpResponse::Ok().json(populated))
}

/// POST /posts/{id}/comments
///
/// Fetch, create, append, save - in that order and without a transaction.
/// A failed save leaves the new comment stored but unlinked, and concurrent
/// additions to one post can overwrite each other's append.
pub async fn add_comment_on_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let req = body.into_inner();

    let mut post = state
        .posts
        .find_by_id(&post_id)
        .await?
        .ok_or_else(|| DomainError::not_found("post", &post_id))?;

    let comment = state
        .comments
        .create(NewComment {
            user_name: req.user_name,
            comment_text: req.comment_text,
            post: post_id,
        })
        .await?;

    post.attach_comment(&comment.id);
    if let Err(e) = state.posts.save(post).await {
        tracing::warn!(comment_id = %comment.id, "Comment stored but not linked to its post");
        return Err(e.into());
    }

    tracing::info!(comment_id = %comment.id, post_id = %comment.post, "Comment added");
    Ok(HttpResponse::Created().json(comment))
}
