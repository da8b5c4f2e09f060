//! # Rendering Framework
//!
//! Per-frame rendering for the widget: screen composition, reusable widget
//! pieces, and the color theme.

pub mod screens;
pub mod theme;
pub mod widgets;
