use serde::{Deserialize, Serialize};

use super::{Post, RequiredFields};
use crate::error::RepoError;

/// Comment entity - belongs to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_name: String,
    pub comment_text: String,
    /// Id of the owning post. Set at creation, never changed.
    pub post: String,
}

/// Unvalidated input for creating a comment on `post`.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_name: Option<String>,
    pub comment_text: Option<String>,
    pub post: String,
}

impl NewComment {
    pub fn into_comment(self, id: String) -> Result<Comment, RepoError> {
        let mut required = RequiredFields::default();
        let user_name = required.take("userName", self.user_name);
        let comment_text = required.take("commentText", self.comment_text);
        required.finish()?;

        Ok(Comment {
            id,
            user_name,
            comment_text,
            post: self.post,
        })
    }
}

/// A comment with its `post` id replaced by the post record.
///
/// `post` is `None` when the referenced post no longer resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithPost {
    pub id: String,
    pub user_name: String,
    pub comment_text: String,
    pub post: Option<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_comment_text_is_rejected() {
        let err = NewComment {
            user_name: Some("U1".into()),
            comment_text: None,
            post: "POST_ID_1".into(),
        }
        .into_comment("COMMENT_ID_9".into())
        .unwrap_err();

        assert_eq!(err.to_string(), "commentText is required");
    }

    #[test]
    fn unresolved_post_serializes_as_null() {
        let comment = CommentWithPost {
            id: "COMMENT_ID_1".into(),
            user_name: "U1".into(),
            comment_text: "Hi".into(),
            post: None,
        };

        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["post"], serde_json::Value::Null);
        assert_eq!(json["commentText"], "Hi");
    }
}
