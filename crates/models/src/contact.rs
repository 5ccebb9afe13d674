//! `contact` table.

use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub birthday: Option<Date>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Every column except the primary key; used as the update set of an upsert.
pub const MUTABLE_COLUMNS: [Column; 12] = [
    Column::Name,
    Column::LastName,
    Column::Phone,
    Column::Email,
    Column::AddressLine1,
    Column::AddressLine2,
    Column::Country,
    Column::State,
    Column::City,
    Column::Birthday,
    Column::CreatedAt,
    Column::UpdatedAt,
];

impl Model {
    /// Active model with every column marked `Set`, suitable for insert.
    pub fn into_insertable(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            name: Set(self.name),
            last_name: Set(self.last_name),
            phone: Set(self.phone),
            email: Set(self.email),
            address_line1: Set(self.address_line1),
            address_line2: Set(self.address_line2),
            country: Set(self.country),
            state: Set(self.state),
            city: Set(self.city),
            birthday: Set(self.birthday),
            created_at: Set(self.created_at),
            updated_at: Set(self.updated_at),
        }
    }
}
