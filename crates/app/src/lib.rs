//! # voltwise-app
//!
//! Application layer — use-cases and the presentation contract.
//!
//! ## Responsibilities
//! - Map each [`EnergyDecision`](voltwise_domain::decision::EnergyDecision)
//!   to a display-ready [`ViewModel`](presenter::ViewModel): colours, labels,
//!   and the two-series chart payload
//! - Provide the `ControllerService` use-case: resolve raw input under the
//!   configured policy, decide, present
//! - Log every evaluation
//!
//! ## Dependency rule
//! Depends on `voltwise-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod presenter;
pub mod services;
