//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use voltwise_domain::error::VoltwiseError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Every failure an API handler can return, rendered as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// Readings that parsed but were refused by the input policy.
    Domain(VoltwiseError),
    /// A query string reading that does not parse.
    Query(QueryRejection),
    /// A request body that is not valid conditions JSON.
    Json(JsonRejection),
}

impl From<VoltwiseError> for ApiError {
    fn from(err: VoltwiseError) -> Self {
        Self::Domain(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(err: QueryRejection) -> Self {
        Self::Query(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::Json(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(VoltwiseError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Query(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Self::Json(
                rejection @ (JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_)),
            ) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            // Missing content type and unreadable bodies keep their own status.
            Self::Json(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltwise_domain::error::ValidationError;

    #[test]
    fn should_map_validation_error_to_bad_request() {
        let err = ApiError::from(VoltwiseError::from(ValidationError::InvalidInput {
            field: "load_demand_kw",
            reason: "must not be negative",
        }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
