//! Application services — use-case implementations.

pub mod controller_service;
