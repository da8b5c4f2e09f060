//! # Backend API Services
//!
//! HTTP client and per-endpoint functions for the chatbot backend.
//!
//! The backend exposes four JSON endpoints consumed here:
//!
//! - `POST /chat` — one conversation turn
//! - `POST /reset` — clear the server-side conversation
//! - `POST /toggle_security` — flip the demo guardrails
//! - `GET /get_context` — fetch the system prompt (intentionally exposed)

mod chat;
mod client;

pub use client::ApiClient;
