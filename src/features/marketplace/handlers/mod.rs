pub mod advertisement_handler;

pub use advertisement_handler::*;
