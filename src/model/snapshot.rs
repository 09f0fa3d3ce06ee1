use rust_decimal::Decimal;

use super::cost::{self, REVENUE, RevenueEntry};
use super::scene::{self, Layer};
use super::step::StepId;

/// End-of-walkthrough economics.
#[derive(Clone, Debug, PartialEq)]
pub struct IncentiveSummary {
    pub revenue: &'static [RevenueEntry],
    pub tax_credit: Decimal,
    pub total_incentives: Decimal,
    pub net_profit: Decimal,
    pub profit_percentage: i64,
}

impl IncentiveSummary {
    pub fn compute() -> Self {
        Self {
            revenue: &REVENUE,
            tax_credit: cost::tax_credit(),
            total_incentives: cost::total_incentives(),
            net_profit: cost::net_profit(),
            profit_percentage: cost::profit_percentage(),
        }
    }
}

/// Read-only view of everything the presentation layer derives from the step.
#[derive(Clone, Debug, PartialEq)]
pub struct WalkthroughSnapshot {
    pub step: u8,
    pub day_progress: f64,
    pub layers: Vec<Layer>,
    pub completed_cost: Decimal,
    /// Present only once the final step is reached.
    pub incentives: Option<IncentiveSummary>,
}

impl WalkthroughSnapshot {
    pub fn at(step: u8) -> Self {
        Self {
            step,
            day_progress: scene::day_progress(step),
            layers: scene::visible_layers(step),
            completed_cost: cost::cumulative_cost(step),
            incentives: (step == StepId::LAST.get()).then(IncentiveSummary::compute),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn not_started_snapshot_is_empty() {
        let snap = WalkthroughSnapshot::at(0);
        assert_eq!(snap.day_progress, 0.0);
        assert!(snap.layers.is_empty());
        assert_eq!(snap.completed_cost, Decimal::ZERO);
        assert_eq!(snap.incentives, None);
    }

    #[test]
    fn incentives_only_at_final_step() {
        for step in 0..5 {
            assert!(WalkthroughSnapshot::at(step).incentives.is_none());
        }
        let last = WalkthroughSnapshot::at(5);
        let summary = last.incentives.expect("summary at step 5");
        assert_eq!(summary.total_incentives, dec!(19950.72));
        assert_eq!(summary.net_profit, dec!(5670.72));
        assert_eq!(summary.profit_percentage, 140);
        assert_eq!(summary.revenue.len(), 3);
        assert_eq!(last.completed_cost, cost::full_cost());
    }

    #[test]
    fn back_hides_layers_above_new_step() {
        let four = WalkthroughSnapshot::at(4);
        let three = WalkthroughSnapshot::at(3);
        assert!(four.layers.contains(&Layer::Inverter));
        assert!(!three.layers.contains(&Layer::Inverter));
        assert!(three.layers.contains(&Layer::Wiring));
        assert!(!four.layers.contains(&Layer::Battery));
    }
}
