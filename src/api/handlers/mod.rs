//! HTTP request handlers.

pub mod health_handler;
pub mod message_handler;

pub use health_handler::health;
pub use message_handler::{add_message, all_messages, message_routes};
