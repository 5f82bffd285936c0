//! Message repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};

use super::entities::message::{self, ActiveModel, Entity as MessageEntity};
use crate::domain::Message;
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Message repository trait for dependency injection.
///
/// Listings are ordered by id, which follows insertion order.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Message>>;

    /// List every stored message
    async fn list(&self) -> AppResult<Vec<Message>>;

    /// List one page of messages together with the total count.
    ///
    /// A page past the last one yields no messages.
    async fn list_page(&self, params: &PaginationParams) -> AppResult<(Vec<Message>, u64)>;

    /// Persist a new message
    async fn create(&self, content: String, created_at: DateTime<Utc>) -> AppResult<Message>;
}

/// Concrete implementation of MessageRepository
pub struct MessageStore {
    db: DatabaseConnection,
}

impl MessageStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Message>> {
        let result = MessageEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Message::from))
    }

    async fn list(&self) -> AppResult<Vec<Message>> {
        let models = MessageEntity::find()
            .order_by_asc(message::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Message::from).collect())
    }

    async fn list_page(&self, params: &PaginationParams) -> AppResult<(Vec<Message>, u64)> {
        let paginator = MessageEntity::find()
            .order_by_asc(message::Column::Id)
            .paginate(&self.db, params.limit());

        let total = paginator.num_items().await?;

        // Past the end; also keeps the paginator's offset math from overflowing
        if params.offset() >= total {
            return Ok((Vec::new(), total));
        }

        let models = paginator.fetch_page(params.page_index()).await?;

        Ok((models.into_iter().map(Message::from).collect(), total))
    }

    async fn create(&self, content: String, created_at: DateTime<Utc>) -> AppResult<Message> {
        let active_model = ActiveModel {
            id: NotSet,
            content: Set(content),
            created_at: Set(created_at),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        tracing::debug!(id = model.id, "Message stored");
        Ok(Message::from(model))
    }
}
