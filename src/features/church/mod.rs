//! Church pages: priests, service schedule, announcements and media gallery.
//!
//! Everything is public read-only; writes go through the admin surface.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ChurchService;
