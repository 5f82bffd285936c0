//! Service Container - Centralized service access.

use std::sync::Arc;

use super::{MessageManager, MessageService};
use crate::infra::MessageStore;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get message service
    fn messages(&self) -> Arc<dyn MessageService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    message_service: Arc<dyn MessageService>,
}

impl Services {
    /// Create service container from a database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let repo = Arc::new(MessageStore::new(db));
        let message_service = Arc::new(MessageManager::new(repo));

        Self { message_service }
    }
}

impl ServiceContainer for Services {
    fn messages(&self) -> Arc<dyn MessageService> {
        self.message_service.clone()
    }
}
