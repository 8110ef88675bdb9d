//! Root path - redirects to the API documentation

use axum::{response::Redirect, routing::get, Router};

use crate::http::docs::DOCS_PATH;

/// GET / - 307 to the Swagger UI
async fn root() -> Redirect {
    Redirect::temporary(DOCS_PATH)
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root))
}
