//! Server-side rendered HTML dashboard (no JavaScript).

pub mod home;

use askama::Template;
use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use voltwise_domain::error::VoltwiseError;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home::index))
}

/// Failure while producing a dashboard page.
#[derive(Debug)]
pub enum DashboardError {
    /// The submitted readings were rejected.
    Domain(VoltwiseError),
    /// A submitted reading does not parse.
    Query(QueryRejection),
    /// The template failed to render.
    Render(askama::Error),
}

impl From<VoltwiseError> for DashboardError {
    fn from(err: VoltwiseError) -> Self {
        Self::Domain(err)
    }
}

impl From<QueryRejection> for DashboardError {
    fn from(err: QueryRejection) -> Self {
        Self::Query(err)
    }
}

impl From<askama::Error> for DashboardError {
    fn from(err: askama::Error) -> Self {
        Self::Render(err)
    }
}

/// Error page; `message` is escaped since it may echo the query string.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    heading: &'a str,
    message: &'a str,
}

fn error_page(status: StatusCode, heading: &str, message: &str) -> Response {
    let template = ErrorTemplate { heading, message };
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "error page render error");
            (status, heading.to_string()).into_response()
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        match self {
            Self::Domain(VoltwiseError::Validation(err)) => error_page(
                StatusCode::BAD_REQUEST,
                "Invalid system conditions",
                &err.to_string(),
            ),
            Self::Query(rejection) => error_page(
                StatusCode::BAD_REQUEST,
                "Invalid system conditions",
                &rejection.body_text(),
            ),
            Self::Render(err) => {
                tracing::error!(error = %err, "template render error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<h1>Error rendering dashboard</h1>".to_string()),
                )
                    .into_response()
            }
        }
    }
}
