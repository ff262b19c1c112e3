pub mod accounts;
pub mod admin;
pub mod auth;
pub mod church;
pub mod community;
pub mod marketplace;
pub mod notifications;
