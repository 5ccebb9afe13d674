use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use service::{contact::ContactDto, pagination::{Page, PageRequest}};
use tracing::info;
use uuid::Uuid;

use crate::{errors::JsonApiError, routes::AppState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Page number (0-based, at most 2147483647), default 0
    pub page: Option<i64>,
    /// Page size (1-100), default 10
    pub size: Option<i64>,
}

#[utoipa::path(
    get, path = "/api/v1/contacts", tag = "contacts",
    params(ListQuery),
    responses(
        (status = 200, description = "Contacts sorted by name and last name", body = crate::openapi::ContactPageDoc),
        (status = 400, description = "Invalid page or size")
    )
)]
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Page<ContactDto>>, JsonApiError> {
    let Query(q) = query?;
    let request = PageRequest::from_query(q.page, q.size)?;
    let page = state.contacts.list(request).await?;
    info!(page = page.number, size = page.size, returned = page.number_of_elements, total = page.total_elements, "list contacts");
    Ok(Json(page))
}

#[utoipa::path(
    get, path = "/api/v1/contacts/{id}", tag = "contacts",
    params(("id" = Uuid, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ContactDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ContactDto>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(state.contacts.get(id).await?))
}

#[utoipa::path(
    post, path = "/api/v1/contacts", tag = "contacts",
    request_body = crate::openapi::ContactDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ContactDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    input: Result<Json<ContactDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactDto>), JsonApiError> {
    let Json(input) = input?;
    let created = state.contacts.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/v1/contacts/{id}", tag = "contacts",
    params(("id" = Uuid, Path, description = "Contact ID")),
    request_body = crate::openapi::ContactDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ContactDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    input: Result<Json<ContactDto>, JsonRejection>,
) -> Result<Json<ContactDto>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = input?;
    Ok(Json(state.contacts.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/v1/contacts/{id}", tag = "contacts",
    params(("id" = Uuid, Path, description = "Contact ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    state.contacts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
