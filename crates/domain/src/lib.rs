//! # voltwise-domain
//!
//! Pure decision core for the voltwise energy controller.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, input policy
//! - Define **system conditions** (solar power, load demand, battery state
//!   of charge, time of day) and how raw slider input is resolved into them
//! - Define the **energy decision** (source, battery action, net flow,
//!   battery zone, rationale) and the rule cascade that produces it
//! - Contain all invariant enforcement and decision logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;

pub mod conditions;
pub mod decision;
pub mod zone;
