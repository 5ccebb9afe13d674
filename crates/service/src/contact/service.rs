use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::contact::domain::ContactDto;
use crate::contact::repository::ContactRepository;
use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

const ENTITY: &str = "Contact";

/// Contact business service independent of web framework.
///
/// Validation happens here, before any store call, so every caller gets the
/// same field rules. Update and delete check existence first and fail with
/// `NotFound` without touching the store.
pub struct ContactService<R: ContactRepository + ?Sized> {
    repo: Arc<R>,
}

/// Server timestamps are kept at microsecond precision so they survive a
/// round-trip through PostgreSQL unchanged.
fn now() -> DateTimeWithTimeZone {
    Utc::now().trunc_subsecs(6).into()
}

impl<R: ContactRepository + ?Sized> ContactService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Page of contacts sorted by name, then last name.
    #[instrument(skip(self))]
    pub async fn list(&self, request: PageRequest) -> Result<Page<ContactDto>, ServiceError> {
        let page = self.repo.find_page(request).await?;
        Ok(page.map(ContactDto::from))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<ContactDto, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(ContactDto::from)
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    /// Validate and store a new contact with a fresh id and timestamps.
    ///
    /// # Examples
    /// ```
    /// use service::contact::{ContactDto, ContactService, repository::mock::MockContactRepository};
    /// use std::sync::Arc;
    /// let svc = ContactService::new(Arc::new(MockContactRepository::default()));
    /// let input = ContactDto { name: "John".into(), last_name: "Doe".into(), email: Some("john@x.com".into()), ..Default::default() };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert!(created.id.is_some());
    /// assert_eq!(created.created_at, created.updated_at);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: ContactDto) -> Result<ContactDto, ServiceError> {
        input.validate()?;
        let model = input.into_new_model(Uuid::new_v4(), now());
        let saved = self.repo.save(model).await?;
        info!(id = %saved.id, "contact_created");
        Ok(saved.into())
    }

    /// Replace every mutable field of an existing contact.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: ContactDto) -> Result<ContactDto, ServiceError> {
        input.validate()?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        let saved = self.repo.save(input.apply_to(existing, now())).await?;
        info!(id = %saved.id, "contact_updated");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::not_found(ENTITY, id));
        }
        self.repo.delete_by_id(id).await?;
        info!(%id, "contact_deleted");
        Ok(())
    }
}
