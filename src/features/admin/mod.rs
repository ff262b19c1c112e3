//! Administrator console endpoints: dashboard counters, user verification
//! and bulk moderation of the listing queue.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AdminService;
