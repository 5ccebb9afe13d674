use models::contact::{self, Column, Entity as ContactEntity, MUTABLE_COLUMNS};
use sea_orm::{
    sea_query::OnConflict, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::contact::repository::ContactRepository;
use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

fn db_err(e: sea_orm::DbErr) -> ServiceError { ServiceError::Db(e.to_string()) }

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmContactRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmContactRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<contact::Model>, ServiceError> {
        ContactEntity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<contact::Model>, ServiceError> {
        // count and fetch see the same snapshot
        let txn = self.db.begin().await.map_err(db_err)?;
        let (total, rows) = {
            let paginator = ContactEntity::find()
                .order_by_asc(Column::Name)
                .order_by_asc(Column::LastName)
                .order_by_asc(Column::Id)
                .paginate(&txn, request.size);
            let total = paginator.num_items().await.map_err(db_err)?;
            let rows = paginator.fetch_page(request.page).await.map_err(db_err)?;
            (total, rows)
        };
        txn.commit().await.map_err(db_err)?;
        Ok(Page::new(rows, request, total))
    }

    async fn save(&self, contact: contact::Model) -> Result<contact::Model, ServiceError> {
        ContactEntity::insert(contact.into_insertable())
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns(MUTABLE_COLUMNS)
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(db_err)
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
        let n = ContactEntity::find_by_id(id).count(&self.db).await.map_err(db_err)?;
        Ok(n > 0)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError> {
        ContactEntity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::{SubsecRound, Utc};
    use sea_orm::prelude::DateTimeWithTimeZone;

    fn model(name: &str, last_name: &str) -> contact::Model {
        let now: DateTimeWithTimeZone = Utc::now().trunc_subsecs(6).into();
        contact::Model {
            id: Uuid::new_v4(),
            name: name.into(),
            last_name: last_name.into(),
            phone: None,
            email: None,
            address_line1: None,
            address_line2: None,
            country: None,
            state: None,
            city: None,
            birthday: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn seaorm_repository_crud() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmContactRepository::new(db);

        let saved = repo.save(model(&format!("repo_{}", Uuid::new_v4()), "Doe")).await?;
        assert!(repo.exists_by_id(saved.id).await?);
        assert_eq!(repo.find_by_id(saved.id).await?, Some(saved.clone()));

        let mut changed = saved.clone();
        changed.city = Some("Denver".into());
        let resaved = repo.save(changed).await?;
        assert_eq!(resaved.city.as_deref(), Some("Denver"));
        assert_eq!(resaved.created_at, saved.created_at);

        repo.delete_by_id(saved.id).await?;
        assert!(!repo.exists_by_id(saved.id).await?);
        assert!(repo.find_by_id(saved.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_pages_sorted() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmContactRepository::new(db);

        let tag = Uuid::new_v4();
        let mut ids = Vec::new();
        for (n, l) in [("zz", "b"), ("aa", "z"), ("aa", "c")] {
            let saved = repo.save(model(&format!("{n}_{tag}"), l)).await?;
            ids.push(saved.id);
        }

        // walk every page and keep only the rows created here
        let mut seen = Vec::new();
        let mut request = PageRequest::new(0, 100)?;
        loop {
            let page = repo.find_page(request).await?;
            assert!(page.content.len() <= 100);
            seen.extend(page.content.into_iter().filter(|c| ids.contains(&c.id)).map(|c| c.id));
            if page.last { break; }
            request.page += 1;
        }
        // ("aa", "c") < ("aa", "z") < ("zz", "b")
        assert_eq!(seen, vec![ids[2], ids[1], ids[0]]);

        for id in ids {
            repo.delete_by_id(id).await?;
        }
        Ok(())
    }
}
