use serde::{Deserialize, Serialize};

use super::{Comment, RequiredFields};
use crate::error::RepoError;

/// Post entity - a blog post and the ordered ids of its comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub user_name: String,
    pub post_text: String,
    pub comments: Vec<String>,
}

impl Post {
    /// Append a comment id. The list is append-only.
    pub fn attach_comment(&mut self, comment_id: impl Into<String>) {
        self.comments.push(comment_id.into());
    }
}

/// Unvalidated input for creating a post, exactly as received.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub user_name: Option<String>,
    pub post_text: Option<String>,
}

impl NewPost {
    /// Enforce required fields and build the record under the given id.
    pub fn into_post(self, id: String) -> Result<Post, RepoError> {
        let mut required = RequiredFields::default();
        let user_name = required.take("userName", self.user_name);
        let post_text = required.take("postText", self.post_text);
        required.finish()?;

        Ok(Post {
            id,
            user_name,
            post_text,
            comments: Vec::new(),
        })
    }
}

/// A post with its `comments` ids replaced by the comment records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithComments {
    pub id: String,
    pub user_name: String,
    pub post_text: String,
    pub comments: Vec<Comment>,
}
