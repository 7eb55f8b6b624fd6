//! Relation population - resolving stored id references into records.

use std::collections::HashMap;

use crate::domain::{Comment, CommentWithPost, Post, PostWithComments};
use crate::error::RepoError;
use crate::ports::{CommentRepository, PostRepository};

/// Resolve the `comments` of every post with a single store lookup.
///
/// Comments keep the order of each post's id list; ids that no longer
/// resolve are dropped.
pub async fn populate_comments(
    comments: &dyn CommentRepository,
    posts: Vec<Post>,
) -> Result<Vec<PostWithComments>, RepoError> {
    let ids: Vec<String> = posts
        .iter()
        .flat_map(|post| post.comments.iter().cloned())
        .collect();

    let found: HashMap<String, Comment> = if ids.is_empty() {
        HashMap::new()
    } else {
        comments
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|comment| (comment.id.clone(), comment))
            .collect()
    };

    Ok(posts
        .into_iter()
        .map(|post| PostWithComments {
            comments: post
                .comments
                .iter()
                .filter_map(|id| found.get(id).cloned())
                .collect(),
            id: post.id,
            user_name: post.user_name,
            post_text: post.post_text,
        })
        .collect())
}

/// Resolve the `comments` of a single post.
pub async fn populate_post_comments(
    comments: &dyn CommentRepository,
    post: Post,
) -> Result<PostWithComments, RepoError> {
    let mut populated = populate_comments(comments, vec![post]).await?;
    populated.pop().ok_or(RepoError::NotFound)
}

/// Resolve the `post` reference of a comment.
pub async fn populate_comment_post(
    posts: &dyn PostRepository,
    comment: Comment,
) -> Result<CommentWithPost, RepoError> {
    let post = posts.find_by_id(&comment.post).await?;

    Ok(CommentWithPost {
        id: comment.id,
        user_name: comment.user_name,
        comment_text: comment.comment_text,
        post,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewComment, NewPost};
    use crate::ports::BaseRepository;
    use async_trait::async_trait;

    /// Canned comment store that returns its fixtures in reverse order.
    struct CannedComments(Vec<Comment>);

    #[async_trait]
    impl BaseRepository<Comment> for CannedComments {
        async fn find_by_id(&self, id: &str) -> Result<Option<Comment>, RepoError> {
            Ok(self.0.iter().find(|c| c.id == id).cloned())
        }

        async fn save(&self, entity: Comment) -> Result<Comment, RepoError> {
            Ok(entity)
        }
    }

    #[async_trait]
    impl CommentRepository for CannedComments {
        async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
            new_comment.into_comment("COMMENT_ID_NEW".into())
        }

        async fn find_many(&self, ids: &[String]) -> Result<Vec<Comment>, RepoError> {
            Ok(self
                .0
                .iter()
                .rev()
                .filter(|c| ids.contains(&c.id))
                .cloned()
                .collect())
        }
    }

    struct CannedPosts(Vec<Post>);

    #[async_trait]
    impl BaseRepository<Post> for CannedPosts {
        async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
            Ok(self.0.iter().find(|p| p.id == id).cloned())
        }

        async fn save(&self, entity: Post) -> Result<Post, RepoError> {
            Ok(entity)
        }
    }

    #[async_trait]
    impl PostRepository for CannedPosts {
        async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
            new_post.into_post("POST_ID_NEW".into())
        }

        async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
            Ok(self.0.clone())
        }
    }

    fn comment(id: &str, post: &str) -> Comment {
        Comment {
            id: id.into(),
            user_name: "U1".into(),
            comment_text: format!("text of {id}"),
            post: post.into(),
        }
    }

    fn post(id: &str, comments: &[&str]) -> Post {
        Post {
            id: id.into(),
            user_name: "USER_ID_1".into(),
            post_text: "body".into(),
            comments: comments.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    #[tokio::test]
    async fn comments_follow_the_post_id_order() {
        let store = CannedComments(vec![
            comment("COMMENT_ID_1", "POST_ID_2"),
            comment("COMMENT_ID_2", "POST_ID_2"),
        ]);

        let populated = populate_comments(
            &store,
            vec![
                post("POST_ID_1", &[]),
                post("POST_ID_2", &["COMMENT_ID_1", "COMMENT_ID_2"]),
            ],
        )
        .await
        .unwrap();

        assert_eq!(populated.len(), 2);
        assert!(populated[0].comments.is_empty());
        let ids: Vec<&str> = populated[1].comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["COMMENT_ID_1", "COMMENT_ID_2"]);
        assert!(populated[1].comments.iter().all(|c| c.post == "POST_ID_2"));
    }

    #[tokio::test]
    async fn dangling_comment_ids_are_dropped() {
        let store = CannedComments(vec![comment("COMMENT_ID_1", "POST_ID_1")]);

        let populated =
            populate_post_comments(&store, post("POST_ID_1", &["COMMENT_ID_1", "GONE"]))
                .await
                .unwrap();

        assert_eq!(populated.comments.len(), 1);
        assert_eq!(populated.comments[0].id, "COMMENT_ID_1");
    }

    #[tokio::test]
    async fn comment_post_is_resolved_or_null() {
        let posts = CannedPosts(vec![post("POST_ID_1", &["COMMENT_ID_1"])]);

        let resolved = populate_comment_post(&posts, comment("COMMENT_ID_1", "POST_ID_1"))
            .await
            .unwrap();
        assert_eq!(resolved.post.map(|p| p.id), Some("POST_ID_1".to_owned()));

        let orphan = populate_comment_post(&posts, comment("COMMENT_ID_2", "POST_ID_9"))
            .await
            .unwrap();
        assert!(orphan.post.is_none());
    }
}
