//! Controller service — the evaluate use-case.
//!
//! Every call runs the whole pipeline (resolve → decide → present) from
//! scratch. Nothing is cached between calls, so re-evaluating on each input
//! change is just calling [`ControllerService::evaluate`] again.

use serde::Serialize;

use voltwise_domain::conditions::{ConditionsInput, InputPolicy, SystemConditions};
use voltwise_domain::decision::{EnergyDecision, decide};
use voltwise_domain::error::VoltwiseError;

use crate::presenter::{ViewModel, present};

/// Everything one evaluation produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub conditions: SystemConditions,
    pub decision: EnergyDecision,
    pub view: ViewModel,
}

/// Application service that evaluates slider input.
#[derive(Debug, Clone, Default)]
pub struct ControllerService {
    policy: InputPolicy,
    defaults: ConditionsInput,
}

impl ControllerService {
    /// Create a service with the given input policy and initial slider values.
    #[must_use]
    pub fn new(policy: InputPolicy, defaults: ConditionsInput) -> Self {
        Self { policy, defaults }
    }

    /// How out-of-range input is handled.
    #[must_use]
    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Slider values used when a caller omits a reading.
    #[must_use]
    pub fn defaults(&self) -> ConditionsInput {
        self.defaults
    }

    /// Resolve `input`, decide, and build the view model.
    ///
    /// # Errors
    ///
    /// Returns [`VoltwiseError::Validation`] if the input cannot be resolved
    /// under the configured policy.
    pub fn evaluate(&self, input: ConditionsInput) -> Result<Evaluation, VoltwiseError> {
        let conditions = input.resolve(self.policy).inspect_err(|err| {
            tracing::warn!(policy = %self.policy, error = %err, "rejected system conditions");
        })?;
        let decision = decide(conditions);
        tracing::debug!(
            solar_power_kw = conditions.solar_power_kw(),
            load_demand_kw = conditions.load_demand_kw(),
            battery_soc_percent = conditions.battery_soc_percent(),
            source = %decision.source,
            battery_action = %decision.battery_action,
            battery_zone = %decision.battery_zone,
            net_flow_kw = decision.net_flow_kw,
            "evaluated energy decision"
        );
        let view = present(&conditions, &decision);
        Ok(Evaluation {
            conditions,
            decision,
            view,
        })
    }
}
