use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};

use zoo_core::NewEnclosure;

use crate::app::routes::common::parse_id;
use crate::app::services::ZooServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/enclosure", post(create_enclosure))
        .route("/enclosures", get(list_enclosures))
        .route("/enclosure/:id", delete(delete_enclosure))
        .route("/enclosure/:id/clean", post(clean_enclosure))
}

pub async fn create_enclosure(
    Extension(services): Extension<Arc<ZooServices>>,
    body: Result<Json<dto::CreateEnclosureRequest>, JsonRejection>,
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

    let new = NewEnclosure {
        name: body.name,
        area: body.area,
    };

    match services.create_enclosure(new).await {
        Ok(enclosure) => {
            (StatusCode::CREATED, Json(dto::enclosure_to_json(&enclosure))).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_enclosures(
    Extension(services): Extension<Arc<ZooServices>>,
) -> axum::response::Response {
    match services.list_enclosures().await {
        Ok(enclosures) => {
            let items = enclosures
                .iter()
                .map(dto::enclosure_to_json)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_enclosure(
    Extension(services): Extension<Arc<ZooServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, "enclosure") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.delete_enclosure(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": format!("enclosure {id} removed") })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn clean_enclosure(
    Extension(services): Extension<Arc<ZooServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, "enclosure") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.clean_enclosure(id).await {
        Ok(enclosure) => {
            (StatusCode::OK, Json(dto::enclosure_to_json(&enclosure))).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
