//! JSON handlers for energy decisions.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use voltwise_app::services::controller_service::Evaluation;
use voltwise_domain::conditions::ConditionsInput;

use crate::error::ApiError;
use crate::query::ConditionsQuery;
use crate::state::AppState;

/// Possible responses from the decision endpoints.
pub enum EvaluateResponse {
    Ok(Json<Evaluation>),
}

impl IntoResponse for EvaluateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/decision` — readings from the query string, defaults for the rest.
pub async fn get(
    State(state): State<AppState>,
    query: Result<Query<ConditionsQuery>, QueryRejection>,
) -> Result<EvaluateResponse, ApiError> {
    let Query(query) = query?;
    let input = query.or_defaults(state.controller.defaults());
    let evaluation = state.controller.evaluate(input)?;
    Ok(EvaluateResponse::Ok(Json(evaluation)))
}

/// `POST /api/decision` — readings from a JSON body.
pub async fn evaluate(
    State(state): State<AppState>,
    input: Result<Json<ConditionsInput>, JsonRejection>,
) -> Result<EvaluateResponse, ApiError> {
    let Json(input) = input?;
    let evaluation = state.controller.evaluate(input)?;
    Ok(EvaluateResponse::Ok(Json(evaluation)))
}
