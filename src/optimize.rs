//! Priority-greedy budget fitting over an appliance list.

use std::fmt;

use serde::Serialize;

use crate::config::SizingConfig;
use crate::error::SizingError;
use crate::load::{ApplianceEntry, ApplianceLoad, DAYS_PER_MONTH};
use crate::sizing::required_kwp;

/// A budget-constrained selection of appliances with the system capacity
/// and cost achieved for them.
///
/// `achieved_cost` never exceeds `budget`. The plan is deterministic:
/// identical entries, budget, and config always yield an identical plan.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetPlan {
    /// The budget the plan was fitted against.
    pub budget: f32,
    /// Entries the budget covers, in funding order.
    pub funded: Vec<ApplianceLoad>,
    /// Entries the budget could not cover, in the same candidate order.
    pub deferred: Vec<ApplianceLoad>,
    /// Panel capacity required by the funded load (kWp).
    pub achieved_kwp: f32,
    /// Capacity cost of the funded load: `achieved_kwp × cost_per_kwp`.
    pub achieved_cost: f32,
    /// Grid-cost-equivalent of the funded load over the plan horizon minus
    /// `achieved_cost`. Negative when the system never pays for itself
    /// within the horizon.
    pub estimated_savings: f32,
}

/// Fits the appliance list against a budget, maximizing priority-weighted
/// coverage with a greedy pass.
///
/// Candidates are sorted by priority rank (high before medium before low);
/// equal-priority ties are broken by ascending per-entry daily kWh, so
/// cheaper-to-satisfy items are funded first. The tie-break is a deliberate
/// total-order choice — input order never decides between equal candidates.
/// Entries are accepted while the capacity cost of the running load
/// (`required_kwp × cost_per_kwp`, resized incrementally on each partial
/// load) stays within budget; the first entry that would exceed it stops
/// acceptance and everything remaining is deferred.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed entry or a negative budget, and
/// `InvalidConfig` when `irradiance × efficiency <= 0`.
pub fn plan_within_budget(
    entries: &[ApplianceEntry],
    budget: f32,
    config: &SizingConfig,
) -> Result<BudgetPlan, SizingError> {
    if budget < 0.0 {
        return Err(SizingError::InvalidInput {
            field: "budget".to_string(),
            message: format!("must be >= 0, got {budget}"),
        });
    }
    // Surface a bad config even for an empty entry list.
    required_kwp(0.0, config)?;

    let mut candidates = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        entry.validate(&format!("entries[{i}]"))?;
        candidates.push(ApplianceLoad {
            entry: entry.clone(),
            daily_kwh: entry.daily_kwh(),
        });
    }
    candidates.sort_by(|a, b| {
        a.entry
            .priority
            .cmp(&b.entry.priority)
            .then(a.daily_kwh.total_cmp(&b.daily_kwh))
    });

    let cost_per_kwp = config.costs.cost_per_kwp;
    let mut funded = Vec::new();
    let mut deferred = Vec::new();
    let mut funded_daily_kwh = 0.0_f32;
    let mut achieved_kwp = 0.0_f32;

    let mut accepting = true;
    for candidate in candidates {
        if accepting {
            let next_kwp = required_kwp(funded_daily_kwh + candidate.daily_kwh, config)?;
            if next_kwp * cost_per_kwp <= budget {
                funded_daily_kwh += candidate.daily_kwh;
                achieved_kwp = next_kwp;
                funded.push(candidate);
                continue;
            }
            accepting = false;
        }
        deferred.push(candidate);
    }

    let achieved_cost = achieved_kwp * cost_per_kwp;
    let grid_equivalent = funded_daily_kwh
        * DAYS_PER_MONTH
        * config.costs.grid_cost_per_kwh
        * config.costs.plan_horizon_months as f32;

    Ok(BudgetPlan {
        budget,
        funded,
        deferred,
        achieved_kwp,
        achieved_cost,
        estimated_savings: grid_equivalent - achieved_cost,
    })
}

impl fmt::Display for BudgetPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Budget Plan ---")?;
        writeln!(f, "Budget:            {:>14.0}", self.budget)?;
        writeln!(f, "Achieved capacity: {:>11.3} kWp", self.achieved_kwp)?;
        writeln!(f, "Achieved cost:     {:>14.0}", self.achieved_cost)?;
        writeln!(f, "Estimated savings: {:>14.0}", self.estimated_savings)?;
        writeln!(f, "Funded ({}):", self.funded.len())?;
        for load in &self.funded {
            writeln!(
                f,
                "  {:<28} {:>8.3} kWh/day  [{}]",
                load.entry.name, load.daily_kwh, load.entry.priority
            )?;
        }
        write!(f, "Deferred ({}):", self.deferred.len())?;
        for load in &self.deferred {
            write!(
                f,
                "\n  {:<28} {:>8.3} kWh/day  [{}]",
                load.entry.name, load.daily_kwh, load.entry.priority
            )?;
        }
        Ok(())
    }
}
