//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the widget clients and the chatbot backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`chat`] - Chat turns, conversation reset, security toggle, system prompt
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ### Request/Response Pair
//!
//! ```text
//! POST /chat
//! Content-Type: application/json
//!
//! {
//!   "message": "Can I schedule a test drive?",
//!   "session_id": "user_k3j9x0q2p",
//!   "use_rag": true
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "response": "Of course! When would you like to come by?",
//!   "session_id": "user_k3j9x0q2p",
//!   "exploited": false
//! }
//! ```

pub mod chat;

pub use chat::*;
