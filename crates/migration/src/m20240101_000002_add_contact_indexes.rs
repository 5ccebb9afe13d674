use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_contact::Contact;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing sorts by (name, last_name, id)
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_name_last_name")
                    .table(Contact::Table)
                    .col(Contact::Name)
                    .col(Contact::LastName)
                    .col(Contact::Id)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_contact_name_last_name").table(Contact::Table).to_owned())
            .await
    }
}
