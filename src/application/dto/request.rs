//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::application::services::{SalonInputDto, SalonView, ServicePatchDto, ServiceSpecDto};

/// Create or update salon request
///
/// Presence of `name` is checked by the directory service so that a missing
/// name and a blank one produce the same error.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SalonRequest {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 200, message = "Tagline must be at most 200 characters"))]
    pub tagline: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 100, message = "City must be at most 100 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 20, message = "Phone must be at most 20 characters"))]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub services: Vec<ServiceRequest>,
}

/// Service request, used for creation and partial updates alike
///
/// `price` and `duration` stay untyped here: forms send text, JSON clients
/// send numbers, and coercion happens in one place.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ServiceRequest {
    #[validate(length(max = 100, message = "Service name must be at most 100 characters"))]
    pub service_name: Option<String>,

    pub price: Option<Value>,
    pub duration: Option<Value>,
}

/// Salon listing query parameters
#[derive(Debug, Default, Deserialize)]
pub struct SalonListParams {
    pub view: Option<SalonView>,
}

impl From<SalonRequest> for SalonInputDto {
    fn from(request: SalonRequest) -> Self {
        Self {
            name: request.name,
            tagline: request.tagline,
            description: request.description,
            address: request.address,
            city: request.city,
            phone: request.phone,
            services: request.services.into_iter().map(ServiceSpecDto::from).collect(),
        }
    }
}

impl From<ServiceRequest> for ServiceSpecDto {
    fn from(request: ServiceRequest) -> Self {
        Self {
            service_name: request.service_name,
            price: request.price,
            duration: request.duration,
        }
    }
}

impl From<ServiceRequest> for ServicePatchDto {
    fn from(request: ServiceRequest) -> Self {
        Self {
            service_name: request.service_name,
            price: request.price,
            duration: request.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_services_with_text_numbers() {
        let request: SalonRequest = serde_json::from_value(json!({
            "name": "Glow",
            "services": [{"service_name": "Haircut", "price": "20", "duration": 30}]
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        let input = SalonInputDto::from(request);
        assert_eq!(input.services[0].price, Some(json!("20")));
        assert_eq!(input.services[0].duration, Some(json!(30)));
    }

    #[test]
    fn overlong_nested_service_name_fails_validation() {
        let request = SalonRequest {
            name: Some("Glow".into()),
            services: vec![ServiceRequest {
                service_name: Some("x".repeat(101)),
                ..Default::default()
            }],
            ..Default::default()
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn view_parameter_is_lowercase() {
        let params: SalonListParams = serde_json::from_value(json!({"view": "summary"})).unwrap();
        assert_eq!(params.view, Some(SalonView::Summary));
    }
}
