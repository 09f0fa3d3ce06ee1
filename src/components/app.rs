use super::{
    cost_panel::CostPanel, progress_header::ProgressHeader, solar_scene::SolarScene,
    step_navigation::StepNavigation, tutorial_overlay::TutorialOverlay,
};
use crate::config::Settings;
use crate::model::{WalkthroughAction, WalkthroughSnapshot, WalkthroughState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    #[prop_or_default]
    pub settings: Settings,
}

/// Entry animations for layers and panels; left out entirely under reduced motion.
const MOTION_CSS: &str = "\
.sw-enter { animation: sw-fade-in 0.6s ease-out both; }
.sw-fade-in { animation: sw-fade-in 0.4s ease-out both; }
@keyframes sw-fade-in { from { opacity: 0; } to { opacity: 1; } }";

// Owns the walkthrough state; children only see the snapshot and emit intents.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_reducer(WalkthroughState::default);
    let snapshot = WalkthroughSnapshot::at(state.current_step());

    let intent = |action: WalkthroughAction| {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(action))
    };
    let on_start = intent(WalkthroughAction::Start);
    let on_next = intent(WalkthroughAction::Next);
    let on_back = intent(WalkthroughAction::Back);
    let on_restart = intent(WalkthroughAction::Restart);

    let step = snapshot.step;
    let started = state.current_step() > 0;

    html! {
        <ContextProvider<Settings> context={props.settings.clone()}>
            { if props.settings.reduced_motion { html! {} } else { html! { <style>{ MOTION_CSS }</style> } } }
            <div style="min-height:100vh; display:flex; flex-direction:column; background:#0e1116; color:#e6edf3; font-family:Inter, system-ui, sans-serif;">
                <ProgressHeader current_step={step} />
                <div style="flex:1; display:flex; flex-wrap:wrap;">
                    <main style="flex:1 1 560px; position:relative; display:flex; flex-direction:column;">
                        <TutorialOverlay show={state.tutorial_visible()} on_start={on_start} />
                        <div style="flex:1; display:flex; align-items:center; justify-content:center; padding:16px;">
                            <SolarScene snapshot={snapshot.clone()} />
                        </div>
                        { if started {
                            html! { <StepNavigation current_step={step} {on_back} {on_next} {on_restart} /> }
                        } else { html! {} } }
                    </main>
                    <aside style="flex:0 0 340px; border-left:1px solid #30363d; background:rgba(22,27,34,0.6); padding:20px;">
                        <CostPanel snapshot={snapshot} />
                    </aside>
                </div>
            </div>
        </ContextProvider<Settings>>
    }
}
