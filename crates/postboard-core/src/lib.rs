//! # Postboard Core
//!
//! The domain layer of the Postboard backend.
//! Posts, comments, the store ports they are persisted through, and the
//! relation population shared by every store implementation.

pub mod domain;
pub mod error;
pub mod ports;
pub mod relations;

pub use error::{DomainError, RepoError};
