//! In-memory stores - used when no database is configured, and by tests.
//!
//! Each store operation takes the lock once, so a fetch/modify/save sequence
//! spanning several calls is not isolated: the last `save` wins.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::{Comment, NewComment, NewPost, Post, new_record_id};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, CommentRepository, PostRepository};

/// Posts kept in insertion order. Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records, kept in the given order.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

#[async_trait]
impl BaseRepository<Post> for InMemoryPostRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let slot = posts
            .iter_mut()
            .find(|p| p.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let post = new_post.into_post(new_record_id())?;
        self.posts.write().await.push(post.clone());
        tracing::debug!(post_id = %post.id, "Post stored in memory");
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }
}

/// Comments kept in insertion order. Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(comments: Vec<Comment>) -> Self {
        Self {
            comments: RwLock::new(comments),
        }
    }

    pub async fn len(&self) -> usize {
        self.comments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.comments.read().await.is_empty()
    }
}

#[async_trait]
impl BaseRepository<Comment> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Comment>, RepoError> {
        let comments = self.comments.read().await;
        Ok(comments.iter().find(|c| c.id == id).cloned())
    }

    async fn save(&self, entity: Comment) -> Result<Comment, RepoError> {
        let mut comments = self.comments.write().await;
        let slot = comments
            .iter_mut()
            .find(|c| c.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
        let comment = new_comment.into_comment(new_record_id())?;
        self.comments.write().await.push(comment.clone());
        tracing::debug!(comment_id = %comment.id, post_id = %comment.post, "Comment stored in memory");
        Ok(comment)
    }

    async fn find_many(&self, ids: &[String]) -> Result<Vec<Comment>, RepoError> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }
}
