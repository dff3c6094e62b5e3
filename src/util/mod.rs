//! Utility helpers shared across editor modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! to improve reuse and testability.

pub mod html;
pub mod map_click;
pub mod marker_style;
