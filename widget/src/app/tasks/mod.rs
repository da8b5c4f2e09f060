//! # Async Background Tasks
//!
//! Network tasks spawned on the shared Tokio runtime. Each task issues
//! exactly one HTTP call and reports back through the event channel; tasks
//! never hold the state lock across an await.

pub mod chat;
