//! # External Services
//!
//! Integrations with systems outside the widget process. Currently a single
//! concern: the chatbot backend HTTP API.

pub mod api;
