//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser timing concerns from page and component
//! logic to improve reuse and testability.

pub mod reveal;
pub mod timer;
