use crate::config::Settings;
use crate::model::{Layer, SceneTheme, WalkthroughSnapshot};
use crate::util::format_number as num;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SolarSceneProps {
    pub snapshot: WalkthroughSnapshot,
}

const STARS: [(u16, u16); 12] = [
    (80, 40), (200, 25), (350, 55), (480, 30), (600, 50), (720, 35),
    (150, 80), (400, 20), (550, 70), (680, 15), (260, 45), (520, 85),
];
const POST_XS: [f64; 5] = [100.0, 180.0, 260.0, 340.0, 420.0];
const PANEL_COUNT: usize = 8;
const PANELS_PER_ROW: usize = 4;
const WIRE_PATH: &str =
    "M 428 310 C 450 310, 465 355, 480 362 C 495 370, 530 360, 550 340 C 560 330, 568 310, 572 296";

fn defs(theme: &SceneTheme) -> Html {
    let stop = |offset: &'static str, color: String| html! { <stop offset={offset} stop-color={color} /> };
    html! {
        <defs>
            <linearGradient id="skyGrad" x1="0" y1="0" x2="0" y2="1">
                { stop("0%", theme.sky[0].to_string()) }
                { stop("60%", theme.sky[1].to_string()) }
                { stop("100%", theme.sky[2].to_string()) }
            </linearGradient>
            <linearGradient id="groundGrad" x1="0" y1="0" x2="0" y2="1">
                { stop("0%", theme.ground[0].to_string()) }
                { stop("100%", theme.ground[1].to_string()) }
            </linearGradient>
            <linearGradient id="panelGrad" x1="0" y1="0" x2="0" y2="1">
                { stop("0%", theme.panel[0].to_string()) }
                { stop("50%", theme.panel[1].to_string()) }
                { stop("100%", theme.panel[2].to_string()) }
            </linearGradient>
            <linearGradient id="panelShine" x1="0" y1="0" x2="1" y2="1">
                <stop offset="0%" stop-color="hsl(215, 60%, 55%)" stop-opacity={num(theme.panel_shine[0])} />
                <stop offset="50%" stop-color="hsl(215, 60%, 55%)" stop-opacity="0" />
                <stop offset="100%" stop-color="hsl(215, 60%, 55%)" stop-opacity={num(theme.panel_shine[1])} />
            </linearGradient>
            <radialGradient id="sunGlow">
                <stop offset="0%" stop-color="hsl(45, 95%, 70%)" stop-opacity={num(theme.sun_glow)} />
                <stop offset="100%" stop-color="hsl(45, 95%, 70%)" stop-opacity="0" />
            </radialGradient>
            <filter id="glow">
                <feGaussianBlur stdDeviation="3" result="blur" />
                <feMerge>
                    <feMergeNode in="blur" />
                    <feMergeNode in="SourceGraphic" />
                </feMerge>
            </filter>
            <filter id="softGlow">
                <feGaussianBlur stdDeviation="8" />
            </filter>
        </defs>
    }
}

fn backdrop(theme: &SceneTheme) -> Html {
    let stars = STARS.iter().enumerate().map(|(i, (cx, cy))| {
        let opacity = (0.4 + (i % 3) as f64 * 0.2) * theme.stars;
        html! { <circle key={i} cx={cx.to_string()} cy={cy.to_string()} r="0.8" fill="hsl(0, 0%, 85%)" opacity={num(opacity)} /> }
    });
    let texture = (0..20).map(|i| {
        let x = f64::from(i) * 42.0;
        let wave = (f64::from(i) * 1.5).sin() * 8.0;
        html! {
            <line key={i} x1={num(x)} y1={num(385.0 + wave)} x2={num(x + 15.0)} y2={num(380.0 + wave)}
                stroke={theme.ground_texture.to_string()} stroke-width="1" opacity={num(theme.texture_opacity)} />
        }
    });
    html! {
        <g>
            <rect x="0" y="0" width="800" height="360" fill="url(#skyGrad)" />
            { for stars }
            <circle cx="680" cy="80" r="110" fill="url(#sunGlow)" />
            <circle cx="680" cy="80" r="80" fill="hsl(45, 90%, 70%)" opacity={num(theme.sun.halo)} filter="url(#softGlow)" />
            <circle cx="680" cy="80" r="30" fill="hsl(45, 90%, 75%)" opacity={num(theme.sun.disc)} />
            <circle cx="680" cy="80" r="18" fill="hsl(45, 95%, 80%)" opacity={num(theme.sun.core)} />
            <rect x="0" y="320" width="800" height="40" fill={theme.horizon.to_string()} opacity={num(theme.horizon_opacity)} />
            <rect x="0" y="350" width="800" height="150" fill="url(#groundGrad)" />
            { for texture }
        </g>
    }
}

fn house(theme: &SceneTheme) -> Html {
    let window = |x: f64| {
        let mullion = theme.mullion.to_string();
        html! {
            <g>
                <rect x={num(x)} y="265" width="34" height="28" fill="hsl(45, 50%, 55%)" rx="1" opacity={num(theme.window_glow[0])} />
                <rect x={num(x + 2.0)} y="267" width="30" height="24" fill="hsl(45, 60%, 65%)" rx="1" opacity={num(theme.window_glow[1])} />
                <line x1={num(x + 17.0)} y1="265" x2={num(x + 17.0)} y2="293" stroke={mullion.clone()} stroke-width="1.5" />
                <line x1={num(x)} y1="279" x2={num(x + 34.0)} y2="279" stroke={mullion} stroke-width="1.5" />
            </g>
        }
    };
    html! {
        <g>
            <ellipse cx="670" cy="360" rx="120" ry="8" fill="hsl(220, 20%, 5%)" opacity={num(theme.shadow_opacity)} />
            <rect x="580" y="240" width="180" height="115" fill={theme.wall[0].to_string()} rx="2" />
            <rect x="582" y="242" width="176" height="111" fill={theme.wall[1].to_string()} rx="1" />
            <polygon points="570,240 670,180 770,240" fill={theme.roof[0].to_string()} />
            <polygon points="575,240 670,184 765,240" fill={theme.roof[1].to_string()} />
            <rect x="648" y="295" width="32" height="60" fill={theme.door[0].to_string()} rx="2" />
            <rect x="650" y="297" width="28" height="56" fill={theme.door[1].to_string()} rx="1" />
            <circle cx="671" cy="327" r="2" fill="hsl(45, 50%, 60%)" />
            { window(598.0) }
            { window(698.0) }
        </g>
    }
}

fn house_panel() -> Html {
    html! {
        <g class="sw-enter">
            <rect x="572" y="285" width="16" height="22" fill="hsl(220, 10%, 40%)" stroke="hsl(220, 10%, 30%)" stroke-width="1" rx="2" />
            <line x1="576" y1="292" x2="584" y2="292" stroke="hsl(152, 60%, 50%)" stroke-width="1.5" />
            <line x1="576" y1="296" x2="584" y2="296" stroke="hsl(0, 60%, 50%)" stroke-width="1.5" />
            <line x1="576" y1="300" x2="584" y2="300" stroke="hsl(45, 70%, 55%)" stroke-width="1.5" />
        </g>
    }
}

fn posts() -> Html {
    let posts = POST_XS.iter().map(|x| html! {
        <g key={x.to_string()}>
            <rect x={num(x - 3.0)} y="340" width="6" height="20" fill="hsl(220, 8%, 45%)" />
            <rect x={num(x - 2.5)} y="300" width="5" height="45" fill="hsl(220, 8%, 50%)" />
        </g>
    });
    html! {
        <g class="sw-enter">
            { for posts }
            <rect x="95" y="300" width="330" height="3" fill="hsl(220, 8%, 50%)" />
            <rect x="95" y="325" width="330" height="3" fill="hsl(220, 8%, 50%)" />
        </g>
    }
}

fn panels() -> Html {
    let panels = (0..PANEL_COUNT).map(|i| {
        let x = 100.0 + (i % PANELS_PER_ROW) as f64 * 82.0;
        let y = 293.0 + (i / PANELS_PER_ROW) as f64 * 19.0;
        let grid = "hsl(215, 35%, 35%)";
        let cell_lines = [19.5, 39.0, 58.5].map(|dx| html! {
            <line x1={num(x + dx)} y1={num(y)} x2={num(x + dx)} y2={num(y + 16.0)} stroke={grid} stroke-width="0.3" />
        });
        html! {
            <g key={i}>
                <rect x={num(x)} y={num(y)} width="78" height="16" fill="url(#panelGrad)" stroke="hsl(220, 8%, 45%)" stroke-width="0.8" rx="1" />
                <rect x={num(x)} y={num(y)} width="78" height="16" fill="url(#panelShine)" rx="1" />
                { for cell_lines }
                <line x1={num(x)} y1={num(y + 8.0)} x2={num(x + 78.0)} y2={num(y + 8.0)} stroke={grid} stroke-width="0.3" />
            </g>
        }
    });
    html! { <g class="sw-enter">{ for panels }</g> }
}

fn wiring() -> Html {
    html! {
        <g class="sw-enter">
            <path d={WIRE_PATH} fill="none" stroke="hsl(35, 80%, 55%)" stroke-width="2.5" stroke-dasharray="5 3" />
            <rect x="460" y="360" width="90" height="5" rx="2.5" fill="hsl(220, 8%, 40%)" />
            <rect x="470" y="378" width="45" height="14" rx="7" fill="hsl(35, 80%, 55%)" opacity="0.15" />
            <text x="492" y="388" text-anchor="middle" font-size="7" fill="hsl(35, 70%, 55%)" font-weight="600" font-family="Inter, sans-serif">{"AC/DC"}</text>
        </g>
    }
}

fn inverter(animate: bool) -> Html {
    html! {
        <g class="sw-enter">
            <rect x="505" y="305" width="26" height="30" fill="hsl(220, 10%, 70%)" stroke="hsl(220, 10%, 45%)" stroke-width="1" rx="3" />
            <rect x="507" y="307" width="22" height="26" fill="hsl(220, 8%, 75%)" rx="2" />
            <text x="518" y="318" text-anchor="middle" font-size="5.5" fill="hsl(220, 10%, 30%)" font-weight="700" font-family="Inter, sans-serif">{"INV"}</text>
            <circle cx="518" cy="327" r="2.5" fill="hsl(152, 70%, 50%)" filter="url(#glow)">
                { if animate {
                    html! { <animate attributeName="opacity" values="1;0.3;1" dur="1.5s" repeatCount="indefinite" /> }
                } else { html! {} } }
            </circle>
            <line x1="531" y1="320" x2="572" y2="296" stroke="hsl(220, 10%, 45%)" stroke-width="1.5" />
        </g>
    }
}

fn battery() -> Html {
    let cells = (0..3).map(|i| html! {
        <rect key={i} x={num(543.0 + f64::from(i) * 8.0)} y="344" width="6" height="9" rx="1" fill="hsl(152, 60%, 45%)" />
    });
    html! {
        <g class="sw-enter">
            <rect x="538" y="340" width="30" height="18" rx="3" fill="hsl(152, 50%, 30%)" stroke="hsl(152, 45%, 22%)" stroke-width="1.5" />
            <rect x="547" y="336" width="12" height="5" rx="1.5" fill="hsl(152, 45%, 22%)" />
            { for cells }
            <line x1="538" y1="347" x2="531" y2="333" stroke="hsl(152, 40%, 30%)" stroke-width="1.5" />
            <text x="553" y="370" text-anchor="middle" font-size="6.5" fill="hsl(152, 40%, 40%)" font-weight="600" font-family="Inter, sans-serif">{"10kWh"}</text>
        </g>
    }
}

// Particles run panels -> inverter -> house on a loop, staggered one second apart.
fn energy_flow() -> Html {
    let particles = (0..3).map(|i| html! {
        <circle key={i} cx="200" cy="305" r="2.5" fill="hsl(45, 95%, 65%)" filter="url(#glow)" opacity="0.9">
            <animate attributeName="cx" values="200;428;518;572" dur="3s" begin={format!("{}s", i)} repeatCount="indefinite" />
            <animate attributeName="cy" values="305;310;320;296" dur="3s" begin={format!("{}s", i)} repeatCount="indefinite" />
        </circle>
    });
    html! { <g>{ for particles }</g> }
}

#[function_component(SolarScene)]
pub fn solar_scene(props: &SolarSceneProps) -> Html {
    let settings = use_context::<Settings>().unwrap_or_default();
    let animate = !settings.reduced_motion;
    let snapshot = &props.snapshot;
    let theme = SceneTheme::at(snapshot.day_progress);

    let layers = snapshot.layers.iter().map(|layer| match layer {
        Layer::HousePanel => house_panel(),
        Layer::Posts => posts(),
        Layer::Panels => panels(),
        Layer::Wiring => wiring(),
        Layer::Inverter => inverter(animate),
        Layer::Battery => battery(),
        Layer::EnergyFlow if animate => energy_flow(),
        Layer::EnergyFlow => html! {},
    });

    html! {
        <svg viewBox="0 0 800 500" style="width:100%; height:100%; max-height:70vh;">
            { defs(&theme) }
            { backdrop(&theme) }
            { house(&theme) }
            { for layers }
        </svg>
    }
}
