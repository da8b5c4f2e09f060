//! # Screen Rendering
//!
//! Per-frame composition of the page backdrop and the chat widget.

pub mod chat;
