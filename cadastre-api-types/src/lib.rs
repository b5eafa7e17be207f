//! # cadastre-api-types
//!
//! Shared API types for the cadastre API service.
//! This crate only depends on serde so it can be used by the backend as well
//! as by Rust or WASM clients.
//!
//! ## Features
//!
//! - Request DTOs (SubmitQueryRequest, CreateUserRequest, TokenRequest, etc.)
//! - Response DTOs (QueryRecord, UserResponse, TokenResponse, etc.)
//! - Error response format (ErrorResponse)
//! - Generic response wrapper (AppResponse)
//!
//! ## Example
//!
//! ```rust
//! use cadastre_api_types::SubmitQueryRequest;
//!
//! let request = SubmitQueryRequest {
//!     cadastre_number: "11:22:333:4".to_string(),
//!     latitude: "55.7".to_string(),
//!     longitude: "37.6".to_string(),
//! };
//! ```

pub mod error;
pub mod requests;
pub mod responses;
pub mod result;

// Re-exports for convenient access
pub use error::ErrorResponse;
pub use requests::*;
pub use responses::*;
pub use result::{AppResponse, StatusCode};
