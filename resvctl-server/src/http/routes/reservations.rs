//! Reservation endpoints - /api/reservations

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::MessageResponse;
use crate::db::{ReservationRepo, ReservationRow};
use crate::http::error::{ApiError, ErrorBody};
use crate::http::server::AppState;
use crate::models::NewReservation;

/// Create / update reservation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReservationRequest {
    /// Accepted for compatibility and ignored; the path id wins on update
    #[serde(default)]
    pub id: Option<i64>,
    pub customer_id: i64,
    #[serde(rename = "dateReservation")]
    pub date_reservation: NaiveDate,
    #[serde(rename = "timeReservation")]
    pub time_reservation: NaiveTime,
}

impl From<ReservationRequest> for NewReservation {
    fn from(req: ReservationRequest) -> Self {
        Self {
            customer_id: req.customer_id,
            date: req.date_reservation,
            time: req.time_reservation,
        }
    }
}

/// Reservation response
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationResponse {
    pub id: i64,
    pub customer_id: i64,
    #[serde(rename = "dateReservation")]
    pub date_reservation: NaiveDate,
    #[serde(rename = "timeReservation")]
    pub time_reservation: NaiveTime,
}

impl From<ReservationRow> for ReservationResponse {
    fn from(r: ReservationRow) -> Self {
        Self {
            id: r.id,
            customer_id: r.customer_id,
            date_reservation: r.date,
            time_reservation: r.time,
        }
    }
}

/// POST /api/reservations - create a reservation
#[utoipa::path(
    post,
    path = "/api/reservations",
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Created reservation", body = ReservationResponse),
        (status = 403, description = "Missing or invalid API key", body = ErrorBody),
        (status = 500, description = "Unknown customer_id (constraint violation)", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReservationRequest>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reservation = NewReservation::from(req);
    let row = ReservationRepo::new(state.store.pool())
        .create(&reservation)
        .await?;
    tracing::info!(id = row.id, customer_id = row.customer_id, "reservation created");

    Ok(Json(ReservationResponse::from(row)))
}

/// GET /api/reservations/{id} - get a single reservation
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    params(("id" = i64, Path, description = "Reservation id")),
    responses(
        (status = 200, description = "Reservation", body = ReservationResponse),
        (status = 404, description = "Reservation not found", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn get_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let row = ReservationRepo::new(state.store.pool()).get(id).await?;
    Ok(Json(ReservationResponse::from(row)))
}

/// GET /api/reservations - list all reservations
#[utoipa::path(
    get,
    path = "/api/reservations",
    responses((status = 200, description = "All reservations", body = [ReservationResponse])),
    tag = "Reservations"
)]
pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let rows = ReservationRepo::new(state.store.pool()).list().await?;
    Ok(Json(rows.into_iter().map(ReservationResponse::from).collect()))
}

/// PUT /api/reservations/{id} - overwrite a reservation
#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    params(("id" = i64, Path, description = "Reservation id")),
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Updated reservation", body = ReservationResponse),
        (status = 404, description = "Reservation not found", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn update_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<ReservationRequest>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reservation = NewReservation::from(req);
    let row = ReservationRepo::new(state.store.pool())
        .update(id, &reservation)
        .await?;
    tracing::info!(id, "reservation updated");

    Ok(Json(ReservationResponse::from(row)))
}

/// DELETE /api/reservations/{id} - delete a reservation
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    params(("id" = i64, Path, description = "Reservation id")),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageResponse),
        (status = 404, description = "Reservation not found", body = ErrorBody)
    ),
    tag = "Reservations"
)]
pub async fn delete_reservation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    ReservationRepo::new(state.store.pool()).delete(id).await?;
    tracing::info!(id, "reservation deleted");

    Ok(Json(MessageResponse::new("Reservation deleted")))
}

/// Reservation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/reservations",
            get(list_reservations).post(create_reservation),
        )
        .route(
            "/api/reservations/{id}",
            get(get_reservation)
                .put(update_reservation)
                .delete(delete_reservation),
        )
}
