//! OpenAPI document and Swagger UI
//!
//! `/` redirects to [`DOCS_PATH`]; the raw document is served at
//! [`OPENAPI_PATH`].

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::error::ErrorBody;
use super::routes::customers::{CustomerRequest, CustomerResponse};
use super::routes::reservations::{ReservationRequest, ReservationResponse};
use super::routes::MessageResponse;

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Registers the `X-API-Key` header scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "ApiKey",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-API-Key",
                "Pre-shared key required on every /api route.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "resvctl API",
        description = "Customer and reservation CRUD."
    ),
    security(("ApiKey" = [])),
    paths(
        crate::http::routes::customers::create_customer,
        crate::http::routes::customers::get_customer,
        crate::http::routes::customers::list_customers,
        crate::http::routes::customers::update_customer,
        crate::http::routes::customers::delete_customer,
        crate::http::routes::reservations::create_reservation,
        crate::http::routes::reservations::get_reservation,
        crate::http::routes::reservations::list_reservations,
        crate::http::routes::reservations::update_reservation,
        crate::http::routes::reservations::delete_reservation,
        crate::http::routes::health::health,
    ),
    components(schemas(
        CustomerRequest,
        CustomerResponse,
        ReservationRequest,
        ReservationResponse,
        MessageResponse,
        ErrorBody
    )),
    tags(
        (name = "Customers", description = "Customer records"),
        (name = "Reservations", description = "Reservations held by customers"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Swagger UI plus the JSON document it renders.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_resources() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/customers",
            "/api/customers/{id}",
            "/api/reservations",
            "/api/reservations/{id}",
            "/health",
        ] {
            assert!(paths.contains(&expected), "missing path {}", expected);
        }
    }

    #[test]
    fn reservation_schema_uses_wire_names() {
        let json = ApiDoc::openapi().to_json().unwrap();
        assert!(json.contains("dateReservation"));
        assert!(json.contains("timeReservation"));
    }
}
