//! Create `contact` table.
//! Column widths match the validation limits on the contact representation.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(uuid(Contact::Id).primary_key())
                    .col(string_len(Contact::Name, 100))
                    .col(string_len(Contact::LastName, 100))
                    .col(string_len_null(Contact::Phone, 20))
                    .col(string_len_null(Contact::Email, 255))
                    .col(string_len_null(Contact::AddressLine1, 255))
                    .col(string_len_null(Contact::AddressLine2, 255))
                    .col(string_len_null(Contact::Country, 100))
                    .col(string_len_null(Contact::State, 100))
                    .col(string_len_null(Contact::City, 100))
                    .col(date_null(Contact::Birthday))
                    .col(timestamp_with_time_zone(Contact::CreatedAt))
                    .col(timestamp_with_time_zone(Contact::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Contact {
    Table,
    Id,
    Name,
    LastName,
    Phone,
    Email,
    AddressLine1,
    AddressLine2,
    Country,
    State,
    City,
    Birthday,
    CreatedAt,
    UpdatedAt,
}
