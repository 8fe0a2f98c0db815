use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use zoo_core::NewAnimal;

use crate::app::routes::common::parse_id;
use crate::app::services::ZooServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/animal", post(create_animal))
        .route("/animals", get(list_animals))
        .route("/animal/:id", get(get_animal).delete(delete_animal))
        .route("/animal/:id/feed", post(feed_animal))
        .route("/animal/:id/vet", post(vet_animal))
}

pub async fn create_animal(
    Extension(services): Extension<Arc<ZooServices>>,
    body: Result<Json<dto::CreateAnimalRequest>, JsonRejection>,
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

    let new = NewAnimal {
        common_name: body.common_name,
        species: body.species,
        age: body.age,
    };

    match services.create_animal(new).await {
        Ok(animal) => (StatusCode::CREATED, Json(dto::animal_to_json(&animal))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_animal(
    Extension(services): Extension<Arc<ZooServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, "animal") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.get_animal(id).await {
        Ok(animal) => (StatusCode::OK, Json(dto::animal_to_json(&animal))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_animal(
    Extension(services): Extension<Arc<ZooServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, "animal") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.delete_animal(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": format!("animal {id} removed") })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_animals(
    Extension(services): Extension<Arc<ZooServices>>,
) -> axum::response::Response {
    match services.list_animals().await {
        Ok(animals) => {
            let items = animals.iter().map(dto::animal_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn feed_animal(
    Extension(services): Extension<Arc<ZooServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, "animal") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.feed_animal(id).await {
        Ok(animal) => (StatusCode::OK, Json(dto::animal_to_json(&animal))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn vet_animal(
    Extension(services): Extension<Arc<ZooServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, "animal") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.record_vet_visit(id).await {
        Ok(animal) => (StatusCode::OK, Json(dto::animal_to_json(&animal))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
