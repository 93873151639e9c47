//! Service Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{directory_service, parse_id};
use crate::application::dto::request::ServiceRequest;
use crate::application::dto::response::{MessageResponse, ServiceEnvelope, ServiceResponse};
use crate::application::services::DirectoryService;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List the services of a salon
pub async fn list_services(
    State(state): State<AppState>,
    Path(salon_id): Path<String>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let salon_id = parse_id(&salon_id, "salon")?;

    let services = directory_service(&state).list_services(salon_id).await?;

    Ok(Json(services.into_iter().map(ServiceResponse::from).collect()))
}

/// Create a service under a salon
pub async fn create_service(
    State(state): State<AppState>,
    Path(salon_id): Path<String>,
    ValidatedJson(body): ValidatedJson<ServiceRequest>,
) -> Result<(StatusCode, Json<ServiceEnvelope>), AppError> {
    let salon_id = parse_id(&salon_id, "salon")?;

    let service = directory_service(&state)
        .create_service(salon_id, body.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ServiceEnvelope {
            message: "Service created successfully",
            service: ServiceResponse::from(service),
        }),
    ))
}

/// Update the supplied fields of a service
pub async fn update_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    ValidatedJson(body): ValidatedJson<ServiceRequest>,
) -> Result<Json<ServiceEnvelope>, AppError> {
    let service_id = parse_id(&service_id, "service")?;

    let service = directory_service(&state)
        .update_service(service_id, body.into())
        .await?;

    Ok(Json(ServiceEnvelope {
        message: "Service updated successfully",
        service: ServiceResponse::from(service),
    }))
}

/// Delete a service
pub async fn delete_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let service_id = parse_id(&service_id, "service")?;

    directory_service(&state).delete_service(service_id).await?;

    Ok(Json(MessageResponse {
        message: "Service deleted successfully",
    }))
}
