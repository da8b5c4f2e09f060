//! # UI Action Handlers
//!
//! Synchronous handlers for widget UI events. Handlers mutate state under a
//! brief write lock; anything that needs the network goes through
//! [`crate::app::tasks`] instead.

pub mod suggestions;
pub mod widget;
