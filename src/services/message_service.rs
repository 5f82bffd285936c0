//! Message service - Handles message-related use cases.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::Message;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::MessageRepository;
use crate::types::{Paginated, PaginationParams};

/// Source of the current time, replaceable in tests.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Message service trait for dependency injection.
#[async_trait]
pub trait MessageService: Send + Sync {
    /// List every stored message
    async fn list_messages(&self) -> AppResult<Vec<Message>>;

    /// List one page of messages
    async fn list_messages_page(&self, params: PaginationParams) -> AppResult<Paginated<Message>>;

    /// Get message by ID
    async fn get_message(&self, id: i32) -> AppResult<Message>;

    /// Store a message with caller-provided content
    async fn create_message(&self, content: String) -> AppResult<Message>;

    /// Store a message whose content records the current time
    async fn add_generated_message(&self) -> AppResult<Message>;
}

/// Concrete implementation of MessageService backed by a repository.
pub struct MessageManager {
    repo: Arc<dyn MessageRepository>,
    clock: Clock,
}

impl MessageManager {
    /// Create new message service using the system clock
    pub fn new(repo: Arc<dyn MessageRepository>) -> Self {
        Self::with_clock(repo, Arc::new(Utc::now))
    }

    /// Create new message service with a custom clock
    pub fn with_clock(repo: Arc<dyn MessageRepository>, clock: Clock) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl MessageService for MessageManager {
    async fn list_messages(&self) -> AppResult<Vec<Message>> {
        self.repo.list().await
    }

    async fn list_messages_page(&self, params: PaginationParams) -> AppResult<Paginated<Message>> {
        let (messages, total) = self.repo.list_page(&params).await?;
        Ok(Paginated::new(messages, params.page(), params.limit(), total))
    }

    async fn get_message(&self, id: i32) -> AppResult<Message> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_message(&self, content: String) -> AppResult<Message> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Content must not be blank"));
        }

        self.repo.create(content, (self.clock)()).await
    }

    async fn add_generated_message(&self) -> AppResult<Message> {
        let now = (self.clock)();
        let message = self
            .repo
            .create(Message::generated_content(now), now)
            .await?;

        tracing::info!(id = message.id, "Generated message added");
        Ok(message)
    }
}
