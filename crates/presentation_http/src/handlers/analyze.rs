//! Environmental analysis handler

use axum::{Json, extract::State};
use domain::{EnvironmentReport, GeoLocation};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Analysis request body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl AnalyzeRequest {
    /// Convert into a location, range-checking only when asked to
    pub fn to_location(self, enforce_bounds: bool) -> Result<GeoLocation, ApiError> {
        if enforce_bounds {
            GeoLocation::new(self.latitude, self.longitude)
                .map_err(|e| ApiError::Validation(e.to_string()))
        } else {
            Ok(GeoLocation::new_unchecked(self.latitude, self.longitude))
        }
    }
}

/// Fetch readings for a coordinate and generate a health advisory
#[instrument(skip(state, request), fields(latitude = request.latitude, longitude = request.longitude))]
pub async fn analyze(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AnalyzeRequest>,
) -> Result<Json<EnvironmentReport>, ApiError> {
    let location = request.to_location(state.enforce_coordinate_bounds)?;
    let report = state.analysis_service.analyze(&location).await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_integers_as_floats() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"latitude": 28, "longitude": 77.2}"#).unwrap();
        assert!((req.latitude - 28.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"latitude": 1.0, "longitude": 2.0, "city": "Delhi"}"#)
                .unwrap();
        assert!((req.longitude - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_accepted_without_enforcement() {
        let req = AnalyzeRequest {
            latitude: 999.0,
            longitude: -999.0,
        };
        let location = req.to_location(false).unwrap();
        assert!((location.latitude() - 999.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_rejected_with_enforcement() {
        let req = AnalyzeRequest {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(matches!(req.to_location(true), Err(ApiError::Validation(_))));

        let req = AnalyzeRequest {
            latitude: 90.0,
            longitude: -180.0,
        };
        assert!(req.to_location(true).is_ok());
    }
}
