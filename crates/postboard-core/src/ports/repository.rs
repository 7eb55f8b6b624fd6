use async_trait::async_trait;

use crate::domain::{Comment, NewComment, NewPost, Post};
use crate::error::RepoError;

/// Operations every record store supports.
#[async_trait]
pub trait BaseRepository<T>: Send + Sync {
    /// Find a record by its id. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepoError>;

    /// Persist the whole record, replacing what is stored under its id.
    async fn save(&self, entity: T) -> Result<T, RepoError>;
}

/// Post store.
#[async_trait]
pub trait PostRepository: BaseRepository<Post> {
    /// Validate and insert a new post under a store-assigned id.
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError>;

    /// All posts in creation order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;
}

/// Comment store.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment> {
    /// Validate and insert a new comment under a store-assigned id.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError>;

    /// Every comment whose id is in `ids`, in no particular order.
    async fn find_many(&self, ids: &[String]) -> Result<Vec<Comment>, RepoError>;
}
