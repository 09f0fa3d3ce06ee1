use crate::config::Settings;
use crate::model::StepId;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressHeaderProps {
    pub current_step: u8,
}

#[function_component]
pub fn ProgressHeader(props: &ProgressHeaderProps) -> Html {
    let settings = use_context::<Settings>().unwrap_or_default();
    let transition = settings.transition("transition:all 0.5s;");
    let segments = StepId::all().map(|id| {
        let reached = id.get() <= props.current_step;
        let (color, width) = if reached { ("#2ea043", 24) } else { ("#30363d", 8) };
        html! {
            <div key={id.get()} style={format!("height:4px; width:{}px; border-radius:2px; background:{}; {}", width, color, transition)}></div>
        }
    });
    html! {
        <header style="display:flex; align-items:center; justify-content:space-between; padding:12px 24px; border-bottom:1px solid #30363d; background:rgba(22,27,34,0.6);">
            <div>
                <h1 style="margin:0; font-size:14px; font-weight:700;">{"Solar Installation Guide"}</h1>
                <p style="margin:0; font-size:10px; letter-spacing:0.15em; text-transform:uppercase; opacity:0.6;">{"Ground-Mount System"}</p>
            </div>
            { if props.current_step > 0 {
                html! { <div style="display:flex; align-items:center; gap:6px;">{ for segments }</div> }
            } else { html! {} } }
        </header>
    }
}
