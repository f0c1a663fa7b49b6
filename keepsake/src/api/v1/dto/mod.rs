//! v1 API Data Transfer Objects.
//!
//! These types define the wire format for the v1 REST API. They are kept
//! separate from the internal domain models in `src/models/` and handle
//! serialization, deserialization, and domain-model conversion.

pub mod common;
pub mod connections;
pub mod details;
pub mod profiles;
pub mod tree;

// Re-export all public types for convenient access via `dto::*`.
pub use common::*;
pub use connections::*;
pub use details::*;
pub use profiles::*;
pub use tree::*;
