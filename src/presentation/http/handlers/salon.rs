//! Salon Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{directory_service, parse_id};
use crate::application::dto::request::{SalonListParams, SalonRequest};
use crate::application::dto::response::{
    MessageResponse, SalonEnvelope, SalonListResponse, SalonResponse, SalonSummaryResponse,
};
use crate::application::services::{DirectoryService, SalonListing, SalonView};
use crate::presentation::http::extractors::{QueryParams, SalonSubmission, ValidatedJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List salons as `{count, salons}`; `?view=summary` selects the summary projection
pub async fn list_salons(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<SalonListParams>,
) -> Result<Response, AppError> {
    let listing = directory_service(&state)
        .list_salons(params.view.unwrap_or_default())
        .await?;

    let response = match listing {
        SalonListing::Full(salons) => Json(SalonListResponse::new(
            salons.into_iter().map(SalonResponse::from).collect(),
        ))
        .into_response(),
        SalonListing::Summary(salons) => Json(SalonListResponse::new(
            salons.into_iter().map(SalonSummaryResponse::from).collect(),
        ))
        .into_response(),
    };

    Ok(response)
}

/// List salon summaries as a bare array
pub async fn list_salon_summaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<SalonSummaryResponse>>, AppError> {
    let listing = directory_service(&state).list_salons(SalonView::Summary).await?;

    Ok(Json(
        listing
            .into_summaries()
            .into_iter()
            .map(SalonSummaryResponse::from)
            .collect(),
    ))
}

/// Create a salon with its services and optional image
pub async fn create_salon(
    State(state): State<AppState>,
    submission: SalonSubmission,
) -> Result<(StatusCode, Json<SalonEnvelope>), AppError> {
    let salon = directory_service(&state)
        .create_salon(submission.request.into(), submission.image)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SalonEnvelope {
            message: "Salon created successfully",
            salon: SalonResponse::from(salon),
        }),
    ))
}

/// Get salon by ID, including its services
pub async fn get_salon(
    State(state): State<AppState>,
    Path(salon_id): Path<String>,
) -> Result<Json<SalonResponse>, AppError> {
    let salon_id = parse_id(&salon_id, "salon")?;

    let salon = directory_service(&state).get_salon(salon_id).await?;

    Ok(Json(SalonResponse::from(salon)))
}

/// Replace salon fields and append services
pub async fn update_salon(
    State(state): State<AppState>,
    Path(salon_id): Path<String>,
    ValidatedJson(body): ValidatedJson<SalonRequest>,
) -> Result<Json<SalonEnvelope>, AppError> {
    let salon_id = parse_id(&salon_id, "salon")?;

    let salon = directory_service(&state)
        .update_salon(salon_id, body.into())
        .await?;

    Ok(Json(SalonEnvelope {
        message: "Salon updated successfully",
        salon: SalonResponse::from(salon),
    }))
}

/// Delete salon and its services
pub async fn delete_salon(
    State(state): State<AppState>,
    Path(salon_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let salon_id = parse_id(&salon_id, "salon")?;

    directory_service(&state).delete_salon(salon_id).await?;

    Ok(Json(MessageResponse {
        message: "Salon deleted successfully",
    }))
}
