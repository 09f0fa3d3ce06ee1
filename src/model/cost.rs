//! Installation cost table and the incentive figures derived from it.
//!
//! Everything here is `const` data plus pure reductions over it. Totals are
//! always recomputed from [`STEPS`]; nothing caches a sum that could drift
//! from the table.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rust_decimal_macros::dec;

use super::step::StepId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineItem {
    pub name: &'static str,
    pub cost: Decimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstallationStep {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [LineItem],
}

impl InstallationStep {
    /// Sum of this step's line items.
    pub fn total_cost(&self) -> Decimal {
        self.items.iter().map(|item| item.cost).sum()
    }
}

/// Display affordance for an incentive row; has no effect on the numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevenueKind {
    /// Payments for renewable energy certificates.
    Credit,
    Rebate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevenueEntry {
    pub name: &'static str,
    pub amount: Decimal,
    pub kind: RevenueKind,
}

const fn item(name: &'static str, cost: Decimal) -> LineItem {
    LineItem { name, cost }
}

pub const STEPS: [InstallationStep; 5] = [
    InstallationStep {
        id: StepId::literal(1),
        title: "Posts & Frames",
        description: "Steel posts are driven into the ground and mounting frames are installed to support the panels at the optimal angle.",
        items: &[
            item("Ground-mount posts & frames", dec!(500)),
            item("Installation labor", dec!(350)),
        ],
    },
    InstallationStep {
        id: StepId::literal(2),
        title: "Solar Panels",
        description: "Eight high-efficiency 560W monocrystalline panels are secured to the racking system for maximum energy production.",
        items: &[
            item("560W panels × 8", dec!(1480)),
            item("Mounting hardware", dec!(250)),
            item("Installation labor", dec!(400)),
        ],
    },
    InstallationStep {
        id: StepId::literal(3),
        title: "Wiring & Conduit",
        description: "Electrical wiring connects the panels to the inverter and main panel. Conduit protects the cables underground.",
        items: &[item("Complete wiring package", dec!(1800))],
    },
    InstallationStep {
        id: StepId::literal(4),
        title: "System Connection",
        description: "The inverter converts DC power to AC. The system is connected to your home's electrical panel and the utility grid.",
        items: &[
            item("Hybrid inverter", dec!(1050)),
            item("Inspection & permits", dec!(750)),
        ],
    },
    InstallationStep {
        id: StepId::literal(5),
        title: "Battery Storage",
        description: "A battery backup stores excess energy for use at night or during outages, maximizing your energy independence.",
        items: &[item("10kWh LiFePO4 battery system", dec!(7700))],
    },
];

pub const REVENUE: [RevenueEntry; 3] = [
    RevenueEntry {
        name: "REC Payment",
        amount: dec!(6894.72),
        kind: RevenueKind::Credit,
    },
    RevenueEntry {
        name: "Smart Inverter Rebate",
        amount: dec!(1344),
        kind: RevenueKind::Rebate,
    },
    RevenueEntry {
        name: "Battery Rebate",
        amount: dec!(6000),
        kind: RevenueKind::Rebate,
    },
];

/// Share of the full installation cost returned as a tax credit.
pub const TAX_CREDIT_RATE: Decimal = dec!(0.40);

pub fn step(id: StepId) -> Option<&'static InstallationStep> {
    STEPS.iter().find(|s| s.id == id)
}

/// Cost of every step with id <= `current_step`; zero before the walkthrough starts.
pub fn cumulative_cost(current_step: u8) -> Decimal {
    STEPS
        .iter()
        .filter(|s| s.id.get() <= current_step)
        .map(InstallationStep::total_cost)
        .sum()
}

pub fn full_cost() -> Decimal {
    cumulative_cost(StepId::LAST.get())
}

pub fn tax_credit() -> Decimal {
    full_cost() * TAX_CREDIT_RATE
}

pub fn total_revenue() -> Decimal {
    REVENUE.iter().map(|r| r.amount).sum()
}

/// Revenue entries plus the tax credit.
pub fn total_incentives() -> Decimal {
    total_revenue() + tax_credit()
}

pub fn net_profit() -> Decimal {
    total_incentives() - full_cost()
}

/// Incentives as a whole-number percentage of the full cost, rounding halves up.
pub fn profit_percentage() -> i64 {
    let ratio = Decimal::ONE_HUNDRED * total_incentives() / full_cost();
    ratio
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_ids_are_contiguous_and_ascending() {
        let ids: Vec<u8> = STEPS.iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn step_totals() {
        let totals: Vec<Decimal> = STEPS.iter().map(InstallationStep::total_cost).collect();
        assert_eq!(
            totals,
            vec![dec!(850), dec!(2130), dec!(1800), dec!(1800), dec!(7700)]
        );
    }

    #[test]
    fn cumulative_cost_is_monotonic() {
        assert_eq!(cumulative_cost(0), Decimal::ZERO);
        for n in 0..5 {
            assert!(cumulative_cost(n) <= cumulative_cost(n + 1));
        }
        assert_eq!(cumulative_cost(2), dec!(2980));
        assert_eq!(cumulative_cost(4), dec!(6580));
    }

    #[test]
    fn full_cost_matches_table() {
        assert_eq!(cumulative_cost(5), full_cost());
        assert_eq!(full_cost(), dec!(14280));
    }

    #[test]
    fn incentive_figures() {
        assert_eq!(tax_credit(), dec!(5712.0));
        assert_eq!(total_revenue(), dec!(14238.72));
        assert_eq!(total_incentives(), dec!(19950.72));
        assert_eq!(net_profit(), dec!(5670.72));
        assert_eq!(profit_percentage(), 140);
    }

    #[test]
    fn lookup_by_id() {
        let wiring = step(StepId::literal(3)).unwrap();
        assert_eq!(wiring.title, "Wiring & Conduit");
        assert_eq!(wiring.items.len(), 1);
    }
}
