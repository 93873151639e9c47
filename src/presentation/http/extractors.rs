//! Custom Extractors
//!
//! Axum extractors that turn request bodies into validated DTOs and report
//! failures as `AppError` instead of framework rejections.

use axum::{
    extract::{FromRequest, FromRequestParts, Multipart, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::application::dto::request::{SalonRequest, ServiceRequest};
use crate::domain::ImageUpload;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// JSON body that has passed `validator` checks
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        body.validate().map_err(validation_error)?;
        Ok(Self(body))
    }
}

/// Query string parameters, rejected as `AppError` when they do not parse
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(Self(params))
    }
}

/// Salon creation body, either JSON or a multipart form with an image
///
/// The multipart form carries the salon fields as text parts, the services
/// as a JSON-encoded `services` part and the picture as an `image` file part.
#[derive(Debug)]
pub struct SalonSubmission {
    pub request: SalonRequest,
    pub image: Option<ImageUpload>,
}

impl<S> FromRequest<S> for SalonSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let submission = if is_multipart(req.headers()) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            read_multipart(multipart).await?
        } else {
            let Json(request) = Json::<SalonRequest>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Self { request, image: None }
        };

        submission.request.validate().map_err(validation_error)?;
        Ok(submission)
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

async fn read_multipart(mut multipart: Multipart) -> Result<SalonSubmission, AppError> {
    let mut request = SalonRequest::default();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "image" {
            let filename = field.file_name().unwrap_or("").to_string();
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;

            // Browsers send an empty part when no file was picked
            if !filename.is_empty() && !data.is_empty() {
                image = Some(ImageUpload {
                    filename,
                    content_type,
                    data: data.to_vec(),
                });
            }
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        match name.as_str() {
            "name" => request.name = Some(text),
            "tagline" => request.tagline = Some(text),
            "description" => request.description = Some(text),
            "address" => request.address = Some(text),
            "city" => request.city = Some(text),
            "phone" => request.phone = Some(text),
            "services" if !text.trim().is_empty() => {
                request.services = serde_json::from_str::<Vec<ServiceRequest>>(&text)
                    .map_err(|e| AppError::Validation(format!("services: {}", e)))?;
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(SalonSubmission { request, image })
}
