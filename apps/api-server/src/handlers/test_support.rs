//! Fixtures and store doubles for handler tests.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::Value;

use postboard_core::domain::{Comment, NewComment, NewPost, Post};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, CommentRepository, PostRepository};
use postboard_infra::{InMemoryCommentRepository, InMemoryPostRepository};

use super::configure_routes;
use crate::state::AppState;

/// Run one request through the full route table and decode the JSON body.
pub(crate) async fn send(state: AppState, req: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let resp = test::call_service(&app, req.to_request()).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

pub(crate) fn post(id: &str, user: &str, text: &str, comments: &[&str]) -> Post {
    Post {
        id: id.to_string(),
        user_name: user.to_string(),
        post_text: text.to_string(),
        comments: comments.iter().map(|c| (*c).to_string()).collect(),
    }
}

pub(crate) fn comment(id: &str, post: &str, text: &str) -> Comment {
    Comment {
        id: id.to_string(),
        user_name: "U1".to_string(),
        comment_text: text.to_string(),
        post: post.to_string(),
    }
}

/// Two posts: `POST_ID_1` without comments, `POST_ID_2` with two.
pub(crate) fn seeded() -> (Arc<InMemoryPostRepository>, Arc<InMemoryCommentRepository>) {
    let posts = InMemoryPostRepository::with_posts(vec![
        post("POST_ID_1", "USER_ID_1", "Lorem ipsum dolor sit amet.", &[]),
        post(
            "POST_ID_2",
            "USER_ID_2",
            "Ut enim ad minim veniam.",
            &["COMMENT_ID_1", "COMMENT_ID_2"],
        ),
    ]);
    let comments = InMemoryCommentRepository::with_comments(vec![
        comment("COMMENT_ID_1", "POST_ID_2", "First!"),
        comment("COMMENT_ID_2", "POST_ID_2", "Second."),
    ]);
    (Arc::new(posts), Arc::new(comments))
}

pub(crate) fn seeded_state() -> AppState {
    let (posts, comments) = seeded();
    AppState::with_stores(posts, comments)
}

fn refused() -> RepoError {
    RepoError::Connection("connection refused".to_string())
}

/// A store whose every operation fails as if the database were down.
pub(crate) struct UnreachableStore;

#[async_trait]
impl BaseRepository<Post> for UnreachableStore {
    async fn find_by_id(&self, _id: &str) -> Result<Option<Post>, RepoError> {
        Err(refused())
    }

    async fn save(&self, _entity: Post) -> Result<Post, RepoError> {
        Err(refused())
    }
}

#[async_trait]
impl PostRepository for UnreachableStore {
    async fn create(&self, _new_post: NewPost) -> Result<Post, RepoError> {
        Err(refused())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Err(refused())
    }
}

#[async_trait]
impl BaseRepository<Comment> for UnreachableStore {
    async fn find_by_id(&self, _id: &str) -> Result<Option<Comment>, RepoError> {
        Err(refused())
    }

    async fn save(&self, _entity: Comment) -> Result<Comment, RepoError> {
        Err(refused())
    }
}

#[async_trait]
impl CommentRepository for UnreachableStore {
    async fn create(&self, _new_comment: NewComment) -> Result<Comment, RepoError> {
        Err(refused())
    }

    async fn find_many(&self, _ids: &[String]) -> Result<Vec<Comment>, RepoError> {
        Err(refused())
    }
}

/// Post store that reads through to memory but rejects every `save`.
pub(crate) struct SaveRejectingPosts(pub Arc<InMemoryPostRepository>);

#[async_trait]
impl BaseRepository<Post> for SaveRejectingPosts {
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        self.0.find_by_id(id).await
    }

    async fn save(&self, _entity: Post) -> Result<Post, RepoError> {
        Err(RepoError::Query("write conflict".to_string()))
    }
}

#[async_trait]
impl PostRepository for SaveRejectingPosts {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        self.0.create(new_post).await
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        self.0.find_all().await
    }
}
