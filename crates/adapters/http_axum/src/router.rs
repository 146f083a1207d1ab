//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and dashboard routes at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use voltwise_app::services::controller_service::ControllerService;
    use voltwise_domain::conditions::{ConditionsInput, InputPolicy};

    fn app(policy: InputPolicy) -> Router {
        build(AppState::new(ControllerService::new(
            policy,
            ConditionsInput::default(),
        )))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = send(app(InputPolicy::Clamp), get_request("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_evaluate_defaults_when_query_is_empty() {
        let (status, body) = send(app(InputPolicy::Clamp), get_request("/api/decision")).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["decision"]["source"], "solar");
        assert_eq!(json["decision"]["battery_action"], "charging");
        assert_eq!(json["decision"]["battery_zone"], "safe");
        assert_eq!(json["conditions"]["time_of_day"], "evening");
        assert_eq!(json["view"]["zone_color"], "#22d3ee");
    }

    #[tokio::test]
    async fn should_evaluate_query_readings() {
        let (status, body) = send(
            app(InputPolicy::Clamp),
            get_request(
                "/api/decision?solar_power_kw=2&load_demand_kw=4&battery_soc_percent=15&time_of_day=night",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["decision"]["source"], "grid");
        assert_eq!(json["decision"]["battery_action"], "protected");
        assert_eq!(json["decision"]["net_flow_kw"], 0.0);
        assert_eq!(json["view"]["time_of_day_label"], "Night");
    }

    #[tokio::test]
    async fn should_evaluate_posted_readings() {
        let body = serde_json::json!({
            "solar_power_kw": 2.0,
            "load_demand_kw": 4.0,
            "battery_soc_percent": 50,
            "time_of_day": "morning"
        });
        let (status, body) = send(app(InputPolicy::Clamp), post_json("/api/decision", &body)).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["decision"]["source"], "battery");
        assert_eq!(json["decision"]["net_flow_kw"], 2.0);
        assert_eq!(json["view"]["source_label"], "USING BATTERY POWER");
    }

    #[tokio::test]
    async fn should_return_bad_request_when_reject_policy_refuses_input() {
        let body = serde_json::json!({
            "solar_power_kw": -1.0,
            "load_demand_kw": 4.0,
            "battery_soc_percent": 50
        });
        let (status, body) = send(
            app(InputPolicy::Reject),
            post_json("/api/decision", &body),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("solar_power_kw"));
    }

    fn error_message(body: &str) -> String {
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        json["error"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn should_return_json_error_for_non_numeric_query_reading() {
        let (status, body) = send(
            app(InputPolicy::Clamp),
            get_request("/api/decision?battery_soc_percent=abc"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_message(&body).contains("battery_soc_percent"));
    }

    #[tokio::test]
    async fn should_return_json_error_for_empty_query_reading() {
        let (status, body) = send(
            app(InputPolicy::Clamp),
            get_request("/api/decision?solar_power_kw="),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_message(&body).contains("solar_power_kw"));
    }

    #[tokio::test]
    async fn should_clamp_oversized_query_soc() {
        let (status, body) = send(
            app(InputPolicy::Clamp),
            get_request("/api/decision?battery_soc_percent=99999999999999999999"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["conditions"]["battery_soc_percent"], 100);
        assert_eq!(json["decision"]["battery_zone"], "optimal");
    }

    #[tokio::test]
    async fn should_round_fractional_posted_soc_under_clamp() {
        let body = serde_json::json!({
            "solar_power_kw": 2.0,
            "load_demand_kw": 4.0,
            "battery_soc_percent": 50.5
        });
        let (status, body) = send(
            app(InputPolicy::Clamp),
            post_json("/api/decision", &body),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["conditions"]["battery_soc_percent"], 51);
    }

    #[tokio::test]
    async fn should_refuse_fractional_posted_soc_under_reject() {
        let body = serde_json::json!({
            "solar_power_kw": 2.0,
            "load_demand_kw": 4.0,
            "battery_soc_percent": 50.5
        });
        let (status, body) = send(
            app(InputPolicy::Reject),
            post_json("/api/decision", &body),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_message(&body).contains("battery_soc_percent"));
    }

    #[tokio::test]
    async fn should_return_json_error_for_mistyped_body_field() {
        let body = serde_json::json!({
            "solar_power_kw": "lots",
            "load_demand_kw": 4.0,
            "battery_soc_percent": 50
        });
        let (status, body) = send(
            app(InputPolicy::Clamp),
            post_json("/api/decision", &body),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error_message(&body).contains("solar_power_kw"));
    }

    #[tokio::test]
    async fn should_return_json_error_for_malformed_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/decision")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"solar_power_kw\": "))
            .unwrap();
        let (status, body) = send(app(InputPolicy::Clamp), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!error_message(&body).is_empty());
    }

    #[tokio::test]
    async fn should_return_json_error_without_json_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/decision")
            .body(Body::from("{}"))
            .unwrap();
        let (status, body) = send(app(InputPolicy::Clamp), request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(!error_message(&body).is_empty());
    }

    #[tokio::test]
    async fn should_render_dashboard_with_decision() {
        let (status, body) = send(
            app(InputPolicy::Clamp),
            get_request("/?solar_power_kw=5&load_demand_kw=5&battery_soc_percent=100"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("AUTONOMOUS ENERGY CONTROLLER"));
        assert!(body.contains("USING SOLAR POWER"));
        assert!(body.contains("Battery: Idle"));
        assert!(body.contains("Zone: OPTIMAL"));
        assert!(body.contains("#10b981"));
        assert!(body.contains("Solar Generation"));
        assert!(body.contains("Load Consumption"));
    }

    #[tokio::test]
    async fn should_render_dashboard_error_page_for_rejected_input() {
        let (status, body) = send(
            app(InputPolicy::Reject),
            get_request("/?battery_soc_percent=150"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("battery_soc_percent"));
    }

    #[tokio::test]
    async fn should_render_dashboard_error_page_for_unparseable_reading() {
        let (status, body) = send(
            app(InputPolicy::Clamp),
            get_request("/?battery_soc_percent=abc"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid system conditions"));
        assert!(body.contains("battery_soc_percent"));
    }
}
