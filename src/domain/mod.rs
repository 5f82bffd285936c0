//! Domain layer - Core business entities
//!
//! Domain models represent business concepts independent of
//! infrastructure concerns.

pub mod message;

pub use message::{CreateMessage, Message, MessageResponse};
