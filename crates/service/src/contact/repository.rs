use async_trait::async_trait;
use models::contact;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

/// Keyed store for contacts.
///
/// Listing is ordered by `(name, last_name, id)` ascending. `save` inserts or
/// replaces the whole record identified by `contact.id`.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<contact::Model>, ServiceError>;
    async fn find_page(&self, request: PageRequest) -> Result<Page<contact::Model>, ServiceError>;
    async fn save(&self, contact: contact::Model) -> Result<contact::Model, ServiceError>;
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError>;
}

/// Simple in-memory repository for tests, doc examples and running without a database
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MockContactRepository {
        rows: RwLock<HashMap<Uuid, contact::Model>>,
    }

    impl MockContactRepository {
        pub async fn len(&self) -> usize { self.rows.read().await.len() }

        pub async fn is_empty(&self) -> bool { self.rows.read().await.is_empty() }
    }

    #[async_trait]
    impl ContactRepository for MockContactRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<contact::Model>, ServiceError> {
            Ok(self.rows.read().await.get(&id).cloned())
        }

        async fn find_page(&self, request: PageRequest) -> Result<Page<contact::Model>, ServiceError> {
            let rows = self.rows.read().await;
            let mut all: Vec<&contact::Model> = rows.values().collect();
            all.sort_by(|a, b| {
                (&a.name, &a.last_name, a.id).cmp(&(&b.name, &b.last_name, b.id))
            });
            let total = all.len() as u64;
            let content = all
                .into_iter()
                .skip(request.offset() as usize)
                .take(request.size as usize)
                .cloned()
                .collect();
            Ok(Page::new(content, request, total))
        }

        async fn save(&self, contact: contact::Model) -> Result<contact::Model, ServiceError> {
            self.rows.write().await.insert(contact.id, contact.clone());
            Ok(contact)
        }

        async fn exists_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
            Ok(self.rows.read().await.contains_key(&id))
        }

        async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError> {
            self.rows.write().await.remove(&id);
            Ok(())
        }
    }
}
