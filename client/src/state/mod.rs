//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The marketing pages are stateless; the only app-wide model is the staff
//! session held by `auth`.

pub mod auth;
