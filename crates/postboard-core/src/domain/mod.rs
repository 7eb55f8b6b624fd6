//! Domain entities - the core business objects.

mod comment;
mod post;

pub use comment::{Comment, CommentWithPost, NewComment};
pub use post::{NewPost, Post, PostWithComments};

use crate::error::RepoError;

/// Mint a fresh record id. UUIDv7 text sorts in creation order.
pub fn new_record_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// Collects required-field failures in schema order.
#[derive(Default)]
struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    /// Absent and empty strings both fail the requirement.
    fn take(&mut self, name: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    fn finish(self) -> Result<(), RepoError> {
        if self.missing.is_empty() {
            return Ok(());
        }
        let message = self
            .missing
            .iter()
            .map(|field| format!("{field} is required"))
            .collect::<Vec<_>>()
            .join(", ");
        Err(RepoError::Validation(message))
    }
}
