use super::incentives_summary::IncentivesSummary;
use crate::config::Settings;
use crate::model::{StepStatus, WalkthroughSnapshot, cost::{InstallationStep, STEPS}};
use crate::util::format_currency;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CostPanelProps {
    pub snapshot: WalkthroughSnapshot,
}

fn step_row(step: &InstallationStep, status: StepStatus, transition: &str) -> Html {
    let (border, background, opacity) = match status {
        StepStatus::Active => ("rgba(46,160,67,0.4)", "rgba(46,160,67,0.05)", "1"),
        StepStatus::Done => ("rgba(88,166,255,0.2)", "rgba(88,166,255,0.05)", "1"),
        StepStatus::Pending => ("#30363d", "#161b22", "0.4"),
    };
    let (badge_bg, badge) = match status {
        StepStatus::Done => ("#58a6ff", html! { <>{"✓"}</> }),
        StepStatus::Active => ("#2ea043", html! { <>{ step.id.get() }</> }),
        StepStatus::Pending => ("#30363d", html! { <>{ step.id.get() }</> }),
    };
    let amount = match status {
        StepStatus::Pending => "—".to_string(),
        _ => format!("${}", format_currency(step.total_cost())),
    };

    html! {
        <div key={step.id.get()} style={format!("border:1px solid {}; background:{}; opacity:{}; border-radius:6px; padding:10px; {}", border, background, opacity, transition)}>
            <div style="display:flex; align-items:center; gap:8px;">
                <span style={format!("width:20px; height:20px; border-radius:50%; background:{}; color:#fff; font-size:10px; font-weight:700; display:flex; align-items:center; justify-content:center;", badge_bg)}>{ badge }</span>
                <span style="font-size:12px; font-weight:600;">{ step.title }</span>
                <span style="margin-left:auto; font-size:12px; font-weight:700; font-variant-numeric:tabular-nums;">{ amount }</span>
            </div>
            { if status.is_expanded() {
                html! {
                    <div class="sw-fade-in" style="margin-top:4px;">
                        { if status == StepStatus::Active {
                            html! { <p style="margin:4px 0 6px 0; font-size:11px; line-height:1.5; opacity:0.7;">{ step.description }</p> }
                        } else { html! {} } }
                        { for step.items.iter().map(|item| html! {
                            <div style="display:flex; justify-content:space-between; font-size:11px;">
                                <span style="opacity:0.7;">{ item.name }</span>
                                <span style="font-weight:500; font-variant-numeric:tabular-nums;">{ format!("${}", format_currency(item.cost)) }</span>
                            </div>
                        }) }
                    </div>
                }
            } else { html! {} } }
        </div>
    }
}

/// Step checklist with running total; the incentives summary joins it on the final step.
#[function_component]
pub fn CostPanel(props: &CostPanelProps) -> Html {
    let settings = use_context::<Settings>().unwrap_or_default();
    let transition = settings.transition("transition:all 0.3s;");
    let snapshot = &props.snapshot;
    let rows = STEPS
        .iter()
        .map(|step| step_row(step, StepStatus::of(step.id, snapshot.step), transition));

    html! {
        <div style="display:flex; flex-direction:column; height:100%;">
            <h2 style="margin:0 0 2px 0; font-size:14px; font-weight:700; text-transform:uppercase; letter-spacing:0.15em;">{"Investment"}</h2>
            <p style="margin:0 0 16px 0; font-size:12px; opacity:0.6;">{"Click through each step to see costs"}</p>

            <div style="flex:1; display:flex; flex-direction:column; gap:8px; overflow-y:auto;">{ for rows }</div>

            { if snapshot.incentives.is_some() {
                html! {
                    <div class="sw-fade-in" style="margin-top:16px; padding-top:16px; border-top:1px solid #30363d;">
                        <h3 style="margin:0 0 8px 0; font-size:12px; font-weight:700; color:#2ea043; text-transform:uppercase; letter-spacing:0.15em;">{"About Your System"}</h3>
                        <p style="margin:0; font-size:10px; line-height:1.5; opacity:0.6;">
                            {"Your complete solar system installation is now ready. The financial summary below shows your total investment and the immediate returns from government incentives and tax credits. This investment generates ongoing savings year after year."}
                        </p>
                    </div>
                }
            } else { html! {} } }

            <div style="margin-top:12px; padding-top:12px; border-top:1px solid #30363d; display:flex; justify-content:space-between; align-items:center;">
                <span style="font-size:12px; font-weight:600; text-transform:uppercase; letter-spacing:0.1em; opacity:0.6;">{"Total Cost"}</span>
                <span key={snapshot.step} style="font-size:12px; font-weight:700; color:#f85149; font-variant-numeric:tabular-nums;">
                    { format!("${}", format_currency(snapshot.completed_cost)) }
                </span>
            </div>

            { match &snapshot.incentives {
                Some(summary) => html! { <IncentivesSummary summary={summary.clone()} /> },
                None => html! {},
            } }
        </div>
    }
}
