//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `navbar`/`footer` form the global chrome, `auth_bootstrap` wraps the
//! root, and `section_list` composes a page from the components in
//! `sections`.

pub mod auth_bootstrap;
pub mod footer;
pub mod navbar;
pub mod section_frame;
pub mod section_list;
pub mod sections;
