use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TutorialOverlayProps {
    pub show: bool,
    pub on_start: Callback<()>,
}

const TIPS: [&str; 3] = [
    "Navigate through 5 installation phases",
    "See real costs for each component",
    "Discover rebates, credits & your net investment",
];

#[function_component(TutorialOverlay)]
pub fn tutorial_overlay(props: &TutorialOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let start_btn = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="sw-fade-in" style="position:absolute; inset:0; z-index:50; display:flex; align-items:center; justify-content:center; background:rgba(14,17,22,0.8); backdrop-filter:blur(6px);">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:10px; padding:32px; max-width:420px; margin:0 16px; text-align:center;">
                <div style="width:48px; height:48px; margin:0 auto 20px auto; border-radius:50%; background:rgba(46,160,67,0.12); display:flex; align-items:center; justify-content:center; font-size:22px;">{"⚡"}</div>
                <h2 style="margin:0 0 8px 0; font-size:20px; font-weight:700;">{"Your Solar Investment"}</h2>
                <p style="margin:0 0 24px 0; font-size:14px; line-height:1.5; opacity:0.7;">
                    {"See exactly how a ground-mount solar system is built, step by step, and understand the economics of going solar."}
                </p>
                <ol style="margin:0 0 24px 0; padding:0; list-style:none; text-align:left; display:flex; flex-direction:column; gap:10px;">
                    { for TIPS.iter().enumerate().map(|(i, tip)| html! {
                        <li key={i} style="display:flex; align-items:flex-start; gap:10px; font-size:14px; opacity:0.8;">
                            <span style="flex-shrink:0; width:20px; height:20px; border-radius:50%; background:rgba(46,160,67,0.12); color:#2ea043; font-size:10px; font-weight:700; display:flex; align-items:center; justify-content:center;">{ i + 1 }</span>
                            { *tip }
                        </li>
                    }) }
                </ol>
                <button onclick={start_btn} style="width:100%; padding:12px 24px; border:none; border-radius:6px; background:#2ea043; color:#fff; font-size:14px; font-weight:600; cursor:pointer;">
                    {"Explore the System →"}
                </button>
            </div>
        </div>
    }
}
