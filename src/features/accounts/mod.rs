//! Portal user accounts.
//!
//! Registration and login live in the `auth` feature; this feature owns the
//! user record itself and the profile endpoints.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
