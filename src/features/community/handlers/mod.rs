pub mod community_handler;

pub use community_handler::*;
