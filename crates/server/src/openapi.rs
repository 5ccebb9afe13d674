//! OpenAPI document. The `*Doc` types mirror the service shapes for schema
//! generation only, keeping `utoipa` out of the service crate.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Contact representation; `id`, `createdAt` and `updatedAt` are read-only.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDoc {
    pub id: Option<Uuid>,
    #[schema(example = "John", max_length = 100)]
    pub name: String,
    #[schema(example = "Doe", max_length = 100)]
    pub last_name: String,
    #[schema(example = "+1234567890", max_length = 20, pattern = r"^$|^\+?[0-9\-\s()]{7,20}$")]
    pub phone: Option<String>,
    #[schema(example = "john.doe@example.com", max_length = 255)]
    pub email: Option<String>,
    #[schema(example = "123 Main St", max_length = 255)]
    pub address_line1: Option<String>,
    #[schema(example = "Apt 4B", max_length = 255)]
    pub address_line2: Option<String>,
    #[schema(example = "United States", max_length = 100)]
    pub country: Option<String>,
    #[schema(example = "California", max_length = 100)]
    pub state: Option<String>,
    #[schema(example = "Los Angeles", max_length = 100)]
    pub city: Option<String>,
    /// Must be in the past
    pub birthday: Option<NaiveDate>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPageDoc {
    pub content: Vec<ContactDoc>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Contacts API", description = "Contacts management API"),
    paths(
        crate::routes::health,
        crate::routes::contacts::list,
        crate::routes::contacts::get,
        crate::routes::contacts::create,
        crate::routes::contacts::update,
        crate::routes::contacts::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ContactDoc,
            ContactPageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "contacts", description = "Contacts management API")
    )
)]
pub struct ApiDoc;
