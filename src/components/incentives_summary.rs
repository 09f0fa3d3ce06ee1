use crate::model::{IncentiveSummary, cost::{RevenueKind, TAX_CREDIT_RATE}};
use crate::util::format_currency;
use rust_decimal::Decimal;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IncentivesSummaryProps {
    pub summary: IncentiveSummary,
}

fn income_row(icon: (&'static str, &'static str), amount_color: &'static str, label: String, amount: String) -> Html {
    let (icon, icon_color) = icon;
    html! {
        <div style="display:flex; justify-content:space-between; align-items:center; font-size:11px;">
            <div style="display:flex; align-items:center; gap:6px;">
                <span style={format!("color:{};", icon_color)}>{ icon }</span>
                <span style="opacity:0.7;">{ label }</span>
            </div>
            <span style={format!("color:{}; font-weight:600; font-variant-numeric:tabular-nums;", amount_color)}>{ format!("+${}", amount) }</span>
        </div>
    }
}

const REVENUE_COLOR: &str = "#2ea043";
const TAX_CREDIT_COLOR: &str = "#d29922";

// Icon and icon colour per kind; every revenue amount shares REVENUE_COLOR.
fn revenue_icon(kind: RevenueKind) -> (&'static str, &'static str) {
    match kind {
        RevenueKind::Credit => ("⚡", REVENUE_COLOR),
        RevenueKind::Rebate => ("$", "#58a6ff"),
    }
}

fn profit_sentence(percentage: i64) -> String {
    format!(
        "Your system generates {}% profit through rebates and tax credits. 25+ year panel warranty included. You make money while saving the planet.",
        percentage
    )
}

#[function_component]
pub fn IncentivesSummary(props: &IncentivesSummaryProps) -> Html {
    let s = &props.summary;
    let rate_percent = (TAX_CREDIT_RATE * Decimal::ONE_HUNDRED).normalize();
    let revenue_rows = s.revenue.iter().map(|entry| {
        income_row(revenue_icon(entry.kind), REVENUE_COLOR, entry.name.to_string(), format_currency(entry.amount))
    });

    html! {
        <div class="sw-fade-in" style="margin-top:12px; padding-top:12px; border-top:1px solid #30363d;">
            <div style="display:flex; align-items:center; gap:6px; margin-bottom:8px;">
                <span style="color:#2ea043;">{"↗"}</span>
                <span style="font-size:12px; font-weight:700; color:#2ea043; text-transform:uppercase; letter-spacing:0.15em;">{"Revenue & Savings"}</span>
            </div>
            <div style="display:flex; flex-direction:column; gap:6px;">
                { for revenue_rows }
                { income_row(("$", TAX_CREDIT_COLOR), TAX_CREDIT_COLOR, format!("Tax Credits ({}%)", rate_percent), format_currency(s.tax_credit)) }
            </div>
            <div style="margin-top:12px; padding-top:8px; border-top:1px solid #30363d;">
                <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:8px;">
                    <span style="font-size:12px; opacity:0.7;">{"Total Incentives"}</span>
                    <span style="font-size:14px; font-weight:700; color:#3fb950; font-variant-numeric:tabular-nums;">{ format!("${}", format_currency(s.total_incentives)) }</span>
                </div>
                <div style="display:flex; justify-content:space-between; align-items:center; padding:12px; border-radius:6px; background:rgba(63,185,80,0.1); border:1px solid rgba(63,185,80,0.2);">
                    <span style="font-size:14px; font-weight:700;">{"Net Profit"}</span>
                    <span style="font-size:20px; font-weight:700; color:#3fb950; font-variant-numeric:tabular-nums;">{ format!("+${}", format_currency(s.net_profit)) }</span>
                </div>
                <p style="margin:8px 0 0 0; font-size:10px; line-height:1.5; opacity:0.6;">
                    { profit_sentence(s.profit_percentage) }
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cost;

    #[test]
    fn profit_sentence_closes_with_tagline() {
        let text = profit_sentence(cost::profit_percentage());
        assert!(text.starts_with("Your system generates 140% profit"));
        assert!(text.ends_with("You make money while saving the planet."));
    }

    #[test]
    fn icons_vary_by_kind_but_amounts_share_one_colour() {
        assert_eq!(revenue_icon(RevenueKind::Credit), ("⚡", REVENUE_COLOR));
        assert_eq!(revenue_icon(RevenueKind::Rebate).0, "$");
        assert_ne!(revenue_icon(RevenueKind::Rebate).1, REVENUE_COLOR);
    }
}
