mod notifier;

pub use notifier::{AdminNotifier, ListingAction, ListingEvent, NewUserEvent};
