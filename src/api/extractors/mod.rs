//! Custom request extractors.
//!
//! Every rejection is an `AppError`, so clients always receive the JSON
//! error envelope.

mod params;
mod validated_json;

pub use params::{PathParams, QueryParams};
pub use validated_json::ValidatedJson;
