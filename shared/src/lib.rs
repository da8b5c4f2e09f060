//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the chat widget clients and the
//! chatbot backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::chat`]**: Chat turn, reset, security-toggle, and system-prompt DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::truncate_label`]**: Truncate display labels with an ellipsis
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Fields the backend may omit deserialize with `#[serde(default)]`
//!
//! ## Usage in a Client
//!
//! ```rust
//! use shared::dto::chat::ChatRequest;
//!
//! let request = ChatRequest {
//!     message: "Do you have any trucks available?".to_string(),
//!     session_id: "user_k3j9x0q2p".to_string(),
//!     use_rag: true,
//! };
//!
//! let body = serde_json::to_string(&request).expect("serializable request");
//! assert!(body.contains("\"use_rag\":true"));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
