//! # voltwise-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for programmatic access (`/api/decision`)
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: the sliders live in a `GET` form, so every
//!   submission re-runs the whole decide + present pipeline
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## Dependency rule
//! Depends on `voltwise-app` (for the controller service and presenter) and
//! `voltwise-domain` (for types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod query;
pub mod router;
pub mod state;
