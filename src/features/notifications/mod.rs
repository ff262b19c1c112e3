//! Fire-and-forget administrator notifications.
//!
//! Dispatched after listing submissions/edits and new user registrations.
//! Delivery runs on a spawned task and never fails the triggering request:
//! channel errors are logged and dropped (at-most-once, no retry).

pub mod services;

pub use services::{AdminNotifier, ListingAction, ListingEvent, NewUserEvent};
