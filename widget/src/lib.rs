//! # SuperCarz Chat Widget - Library Root
//!
//! A native desktop chat widget that talks to the local SuperCarz chatbot
//! backend. This library crate contains all modules used by the two variant
//! binaries (`showroom` and `security-demo`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              widget (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  Tokio         - Async runtime for network tasks       │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!                         │ HTTP (JSON)
//!                         ▼
//!               ┌─────────────────────┐
//!               │  Chatbot backend    │
//!               │  127.0.0.1:8000     │
//!               └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Widget state machine and orchestration
//!   - Event-driven: UI actions mutate state synchronously, network tasks
//!     report back through an event channel drained once per frame
//!   - One outstanding chat turn at a time, gated by the typing flag
//!
//! - **services**: Backend HTTP client (`/chat`, `/reset`,
//!   `/toggle_security`, `/get_context`)
//!
//! - **ui**: Rendering framework
//!   - `screens`: per-frame widget composition
//!   - `widgets`: bubble, header, message list, suggestion chips, badges
//!   - `theme`: color palette
//!
//! - **utils**: Session-id generation and the shared Tokio runtime

pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;
