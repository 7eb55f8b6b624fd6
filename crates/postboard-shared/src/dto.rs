//! Data Transfer Objects - request bodies for the API.
//!
//! Fields are optional on the wire; required-field enforcement belongs to the
//! store, so a missing field must reach it rather than fail deserialization.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_name: Option<String>,
    pub post_text: Option<String>,
}

/// Body of `POST /posts/{id}/comments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub user_name: Option<String>,
    pub comment_text: Option<String>,
}
