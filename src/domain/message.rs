//! Message domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{GENERATED_CONTENT_PREFIX, GENERATED_CONTENT_TIME_FORMAT};

/// Message domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Content written for a message generated at the given instant.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use message_board::Message;
    ///
    /// let at = Utc.with_ymd_and_hms(2026, 10, 19, 5, 53, 0).unwrap();
    /// assert_eq!(
    ///     Message::generated_content(at),
    ///     "New content generated at Mon Oct 19 05:53:00 UTC 2026"
    /// );
    /// ```
    pub fn generated_content(at: DateTime<Utc>) -> String {
        format!(
            "{} {}",
            GENERATED_CONTENT_PREFIX,
            at.format(GENERATED_CONTENT_TIME_FORMAT)
        )
    }
}

/// Message creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMessage {
    /// Message text
    #[validate(length(min = 1, max = 1000, message = "Content must be between 1 and 1000 characters"))]
    #[schema(example = "Hello from the message board", min_length = 1, max_length = 1000)]
    pub content: String,
}

/// Message response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Message identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Message text
    #[schema(example = "New content generated at Mon Oct 19 05:53:00 UTC 2026")]
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            content: message.content,
            created_at: message.created_at,
        }
    }
}
