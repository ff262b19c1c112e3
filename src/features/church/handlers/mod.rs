pub mod church_handler;

pub use church_handler::*;
