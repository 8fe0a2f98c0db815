//! Employee endpoints.
//!
//! Deliberately asymmetric with the other entities: there is no employee
//! list or get-by-id, and the create path keeps its trailing slash. Both
//! quirks are part of the public contract.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post},
};

use zoo_core::NewEmployee;

use crate::app::routes::common::parse_id;
use crate::app::services::ZooServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/employee/", post(create_employee))
        .route("/employee/:id", delete(delete_employee))
}

pub async fn create_employee(
    Extension(services): Extension<Arc<ZooServices>>,
    body: Result<Json<dto::CreateEmployeeRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(json) => json,
        Err(rejection) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_body",
                rejection.body_text(),
            );
        }
    };

    let new = NewEmployee {
        name: body.name,
        address: body.address,
    };

    match services.create_employee(new).await {
        Ok(employee) => {
            (StatusCode::CREATED, Json(dto::employee_to_json(&employee))).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_employee(
    Extension(services): Extension<Arc<ZooServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, "employee") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.delete_employee(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": format!("employee {id} removed") })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
