//! Section components grouped by the page that introduced them.

pub mod about;
pub mod careers;
pub mod home;
pub mod services;
pub mod shared;
pub mod testimonials;
