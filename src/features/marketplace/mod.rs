//! Marketplace classifieds.
//!
//! Listings go through a moderation workflow: every submission and every
//! author edit lands in `pending` until an administrator approves or rejects
//! it. Only active, approved listings are visible to the public; authors
//! always see their own.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AdvertisementService;
