use crate::model::{StepId, cost};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StepNavigationProps {
    pub current_step: u8,
    pub on_back: Callback<()>,
    pub on_next: Callback<()>,
    pub on_restart: Callback<()>,
}

/// Title strip for the active step plus Back / Next / Start Over.
#[function_component]
pub fn StepNavigation(props: &StepNavigationProps) -> Html {
    let Ok(id) = StepId::try_from(props.current_step) else {
        return html! {};
    };
    let Some(step) = cost::step(id) else {
        return html! {};
    };

    let back_cb = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let next_cb = {
        let cb = props.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let restart_cb = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let primary = "display:flex; align-items:center; gap:4px; padding:8px 20px; border-radius:6px; border:none; background:#2ea043; color:#fff; font-size:12px; font-weight:600; cursor:pointer;";

    html! {
        <div style="padding:0 24px 20px 24px;">
            <div key={id.get()} class="sw-fade-in" style="margin-bottom:16px;">
                <span style="font-size:10px; font-weight:700; color:#2ea043; text-transform:uppercase; letter-spacing:0.2em;">
                    { format!("Step {} of {}", id, StepId::LAST) }
                </span>
                <h2 style="margin:2px 0 0 0; font-size:18px; font-weight:700;">{ step.title }</h2>
                <p style="margin:4px 0 0 0; max-width:36rem; font-size:12px; line-height:1.5; opacity:0.7;">{ step.description }</p>
            </div>
            <div style="display:flex; align-items:center; gap:8px;">
                <button onclick={back_cb} disabled={id == StepId::FIRST}
                    style="padding:8px 16px; border-radius:6px; border:1px solid #30363d; background:transparent; color:inherit; font-size:12px; cursor:pointer;">
                    {"← Back"}
                </button>
                { if id == StepId::LAST {
                    html! { <button onclick={restart_cb} style={primary}>{"↺ Start Over"}</button> }
                } else {
                    html! { <button onclick={next_cb} style={primary}>{"Next →"}</button> }
                } }
            </div>
        </div>
    }
}
