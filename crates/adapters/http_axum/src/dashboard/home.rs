//! Dashboard home page — sliders, status cards, decision logic, flow snapshot.

use askama::Template;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};

use voltwise_app::presenter::{CAPTION, ChartSeries, FOOTER, TITLE, ViewModel};
use voltwise_domain::conditions::TimeOfDay;

use super::DashboardError;
use crate::query::ConditionsQuery;
use crate::state::AppState;

/// Upper end of the power sliders, in kW.
pub const SLIDER_MAX_KW: f64 = 10.0;

/// One entry of the time-of-day selector.
pub struct TimeOption {
    value: &'static str,
    label: String,
    selected: bool,
}

/// One bar of the horizontal flow snapshot.
pub struct BarRow {
    label: &'static str,
    value_label: String,
    color: &'static str,
    width_percent: String,
}

impl BarRow {
    fn from_series(series: &ChartSeries, scale_kw: f64) -> Self {
        Self {
            label: series.label,
            value_label: format!("{:.1} kW", series.value),
            color: series.color,
            width_percent: format!("{:.1}", series.value / scale_kw * 100.0),
        }
    }
}

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    title: &'static str,
    caption: &'static str,
    footer: &'static str,
    slider_max_kw: String,
    solar_value: String,
    load_value: String,
    soc_value: u8,
    time_options: Vec<TimeOption>,
    view: ViewModel,
    bars: Vec<BarRow>,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => DashboardError::from(err).into_response(),
        }
    }
}

/// `GET /` — evaluate the submitted (or default) readings and render them.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<ConditionsQuery>, QueryRejection>,
) -> Result<HomeTemplate, DashboardError> {
    let Query(query) = query?;
    let input = query.or_defaults(state.controller.defaults());
    let evaluation = state.controller.evaluate(input)?;
    let conditions = evaluation.conditions;

    let scale_kw = evaluation
        .view
        .chart
        .iter()
        .map(|series| series.value)
        .fold(SLIDER_MAX_KW, f64::max);
    let bars = evaluation
        .view
        .chart
        .iter()
        .map(|series| BarRow::from_series(series, scale_kw))
        .collect();

    let time_options = TimeOfDay::ALL
        .into_iter()
        .map(|time| TimeOption {
            value: time.as_str(),
            label: time.to_string(),
            selected: time == conditions.time_of_day(),
        })
        .collect();

    Ok(HomeTemplate {
        title: TITLE,
        caption: CAPTION,
        footer: FOOTER,
        slider_max_kw: format!("{SLIDER_MAX_KW:.1}"),
        solar_value: format!("{:.1}", conditions.solar_power_kw()),
        load_value: format!("{:.1}", conditions.load_demand_kw()),
        soc_value: conditions.battery_soc_percent(),
        time_options,
        view: evaluation.view,
        bars,
    })
}
