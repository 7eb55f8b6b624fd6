//! # Postboard Shared
//!
//! Wire types shared between the API and its clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
