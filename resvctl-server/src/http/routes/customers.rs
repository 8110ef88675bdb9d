//! Customer endpoints - /api/customers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::MessageResponse;
use crate::db::{CustomerRepo, CustomerRow};
use crate::http::error::{ApiError, ErrorBody};
use crate::http::server::AppState;
use crate::models::{NewCustomer, ValidationError};

/// Create / update customer request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CustomerRequest {
    /// Accepted for compatibility and ignored; the path id wins on update
    #[serde(default)]
    pub id: Option<i64>,
    #[schema(max_length = 100)]
    pub name: String,
    #[schema(max_length = 15)]
    pub phone: String,
    #[schema(max_length = 100)]
    pub email: String,
}

impl TryFrom<CustomerRequest> for NewCustomer {
    type Error = ValidationError;

    fn try_from(req: CustomerRequest) -> Result<Self, Self::Error> {
        NewCustomer::new(req.name, req.phone, req.email)
    }
}

/// Customer response
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl From<CustomerRow> for CustomerResponse {
    fn from(c: CustomerRow) -> Self {
        Self {
            id: c.id,
            name: c.name,
            phone: c.phone,
            email: c.email,
        }
    }
}

/// POST /api/customers - create a customer
#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Created customer", body = CustomerResponse),
        (status = 403, description = "Missing or invalid API key", body = ErrorBody),
        (status = 422, description = "Field too long", body = ErrorBody)
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = NewCustomer::try_from(req)?;
    let row = CustomerRepo::new(state.store.pool()).create(&customer).await?;
    tracing::info!(id = row.id, "customer created");

    Ok(Json(CustomerResponse::from(row)))
}

/// GET /api/customers/{id} - get a single customer
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer", body = CustomerResponse),
        (status = 404, description = "Customer not found", body = ErrorBody)
    ),
    tag = "Customers"
)]
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let row = CustomerRepo::new(state.store.pool()).get(id).await?;
    Ok(Json(CustomerResponse::from(row)))
}

/// GET /api/customers - list all customers
#[utoipa::path(
    get,
    path = "/api/customers",
    responses((status = 200, description = "All customers", body = [CustomerResponse])),
    tag = "Customers"
)]
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let rows = CustomerRepo::new(state.store.pool()).list().await?;
    Ok(Json(rows.into_iter().map(CustomerResponse::from).collect()))
}

/// PUT /api/customers/{id} - overwrite a customer
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Updated customer", body = CustomerResponse),
        (status = 404, description = "Customer not found", body = ErrorBody),
        (status = 422, description = "Field too long", body = ErrorBody)
    ),
    tag = "Customers"
)]
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<CustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    if req.id.is_some_and(|body_id| body_id != id) {
        tracing::debug!(path_id = id, body_id = ?req.id, "ignoring body id on update");
    }
    let customer = NewCustomer::try_from(req)?;
    let row = CustomerRepo::new(state.store.pool())
        .update(id, &customer)
        .await?;
    tracing::info!(id, "customer updated");

    Ok(Json(CustomerResponse::from(row)))
}

/// DELETE /api/customers/{id} - delete a customer
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 404, description = "Customer not found", body = ErrorBody)
    ),
    tag = "Customers"
)]
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    CustomerRepo::new(state.store.pool()).delete(id).await?;
    tracing::info!(id, "customer deleted");

    Ok(Json(MessageResponse::new("Customer deleted")))
}

/// Customer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/customers", get(list_customers).post(create_customer))
        .route(
            "/api/customers/{id}",
            get(get_customer)
                .put(update_customer)
                .delete(delete_customer),
        )
}
