//! Step-driven scene derivation: the day/night palette and which
//! illustration layers are drawn.
//!
//! The scene brightens as construction advances. [`day_progress`] maps the
//! step to a scalar in `[0, 1]`; every colour in [`SceneTheme`] is a linear
//! HSL blend between a night and a day value at that scalar.

use std::fmt;

use super::step::StepId;

/// Two-term blend: a small linear term across steps 0..=5 (capped at 0.2)
/// plus the dominant ramp over steps 1..=5 mapped onto [0, 0.8].
pub fn day_progress(step: u8) -> f64 {
    let step = f64::from(step);
    (step / 5.0).min(1.0) * 0.2 + ((step - 1.0).max(0.0) / 4.0) * 0.8
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Component-wise linear blend, each channel rounded to a whole degree/percent.
    pub fn lerp(night: Hsl, day: Hsl, progress: f64) -> Hsl {
        let t = progress.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| (a + (b - a) * t).round();
        Hsl {
            h: mix(f64::from(night.h), f64::from(day.h)) as u16,
            s: mix(f64::from(night.s), f64::from(day.s)) as u8,
            l: mix(f64::from(night.l), f64::from(day.l)) as u8,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRamp {
    pub night: Hsl,
    pub day: Hsl,
}

impl ColorRamp {
    const fn new(night: Hsl, day: Hsl) -> Self {
        Self { night, day }
    }

    pub fn at(&self, progress: f64) -> Hsl {
        Hsl::lerp(self.night, self.day, progress)
    }
}

pub const SKY: [ColorRamp; 3] = [
    ColorRamp::new(Hsl::new(220, 35, 10), Hsl::new(200, 75, 80)),
    ColorRamp::new(Hsl::new(215, 30, 18), Hsl::new(200, 70, 85)),
    ColorRamp::new(Hsl::new(210, 25, 28), Hsl::new(195, 65, 88)),
];
pub const GROUND: [ColorRamp; 2] = [
    ColorRamp::new(Hsl::new(150, 20, 20), Hsl::new(110, 40, 45)),
    ColorRamp::new(Hsl::new(150, 25, 12), Hsl::new(110, 35, 35)),
];
pub const PANEL: [ColorRamp; 3] = [
    ColorRamp::new(Hsl::new(215, 45, 38), Hsl::new(210, 50, 45)),
    ColorRamp::new(Hsl::new(215, 50, 28), Hsl::new(210, 50, 35)),
    ColorRamp::new(Hsl::new(215, 55, 22), Hsl::new(210, 50, 28)),
];
const GROUND_TEXTURE: ColorRamp = ColorRamp::new(Hsl::new(150, 30, 25), Hsl::new(110, 40, 50));
const HORIZON: ColorRamp = ColorRamp::new(Hsl::new(210, 25, 28), Hsl::new(180, 60, 70));
const WALL: [ColorRamp; 2] = [
    ColorRamp::new(Hsl::new(220, 12, 55), Hsl::new(200, 15, 75)),
    ColorRamp::new(Hsl::new(220, 10, 62), Hsl::new(200, 12, 82)),
];
const ROOF: [ColorRamp; 2] = [
    ColorRamp::new(Hsl::new(220, 15, 30), Hsl::new(210, 25, 45)),
    ColorRamp::new(Hsl::new(220, 12, 35), Hsl::new(210, 20, 50)),
];
const DOOR: [ColorRamp; 2] = [
    ColorRamp::new(Hsl::new(220, 15, 35), Hsl::new(210, 20, 40)),
    ColorRamp::new(Hsl::new(220, 12, 40), Hsl::new(210, 18, 45)),
];
const MULLION: ColorRamp = ColorRamp::new(Hsl::new(220, 10, 55), Hsl::new(210, 15, 50));

/// Opacities of the sun's three concentric shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunOpacity {
    pub halo: f64,
    pub disc: f64,
    pub core: f64,
}

/// Every step-dependent colour and opacity the scene markup needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTheme {
    pub sky: [Hsl; 3],
    pub ground: [Hsl; 2],
    pub panel: [Hsl; 3],
    pub ground_texture: Hsl,
    pub horizon: Hsl,
    pub wall: [Hsl; 2],
    pub roof: [Hsl; 2],
    pub door: [Hsl; 2],
    pub mullion: Hsl,
    pub stars: f64,
    pub sun: SunOpacity,
    pub sun_glow: f64,
    pub panel_shine: [f64; 2],
    pub horizon_opacity: f64,
    pub texture_opacity: f64,
    pub shadow_opacity: f64,
    /// Lit window frame and pane; both fade as daylight grows.
    pub window_glow: [f64; 2],
}

impl SceneTheme {
    pub fn at(progress: f64) -> Self {
        let p = progress;
        let pair = |ramps: &[ColorRamp; 2]| [ramps[0].at(p), ramps[1].at(p)];
        let sun = p.min(0.7);
        SceneTheme {
            sky: SKY.map(|r| r.at(p)),
            ground: pair(&GROUND),
            panel: PANEL.map(|r| r.at(p)),
            ground_texture: GROUND_TEXTURE.at(p),
            horizon: HORIZON.at(p),
            wall: pair(&WALL),
            roof: pair(&ROOF),
            door: pair(&DOOR),
            mullion: MULLION.at(p),
            stars: (0.4 - p * 0.5).max(0.0),
            sun: SunOpacity {
                halo: 0.04 + sun * 0.3,
                disc: 0.15 + sun * 0.35,
                core: 0.3 + sun * 0.4,
            },
            sun_glow: (0.3 * p).max(0.0),
            panel_shine: [0.4 * (1.0 - p * 0.5), 0.1 * (1.0 - p * 0.5)],
            horizon_opacity: 0.5 * (1.0 - p * 0.3),
            texture_opacity: 0.3 * (1.0 - p * 0.2),
            shadow_opacity: 0.4 * (1.0 - p * 0.5),
            window_glow: [0.7 - p * 0.4, 0.5 - p * 0.3],
        }
    }
}

/// Illustrated subsystems that appear as the installation advances, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    HousePanel,
    Posts,
    Panels,
    Wiring,
    Inverter,
    Battery,
    EnergyFlow,
}

/// Minimum step at which each layer is drawn. Order is draw order.
pub const LAYER_THRESHOLDS: [(Layer, StepId); 7] = [
    (Layer::HousePanel, StepId::literal(4)),
    (Layer::Posts, StepId::literal(1)),
    (Layer::Panels, StepId::literal(2)),
    (Layer::Wiring, StepId::literal(3)),
    (Layer::Inverter, StepId::literal(4)),
    (Layer::Battery, StepId::literal(5)),
    (Layer::EnergyFlow, StepId::literal(4)),
];

impl Layer {
    pub fn threshold(self) -> StepId {
        LAYER_THRESHOLDS
            .iter()
            .find(|(layer, _)| *layer == self)
            .map(|(_, at)| *at)
            .unwrap_or(StepId::LAST)
    }

    pub fn is_visible_at(self, step: u8) -> bool {
        step >= self.threshold().get()
    }
}

pub fn visible_layers(step: u8) -> Vec<Layer> {
    LAYER_THRESHOLDS
        .iter()
        .map(|(layer, _)| *layer)
        .filter(|layer| layer.is_visible_at(step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn day_progress_follows_two_term_blend() {
        let expected = [0.0, 0.04, 0.28, 0.52, 0.76, 1.0];
        for (step, want) in expected.iter().enumerate() {
            let got = day_progress(step as u8);
            assert!(close(got, *want), "step {step}: {got} != {want}");
        }
    }

    #[test]
    fn day_progress_is_increasing() {
        for step in 0..5 {
            assert!(day_progress(step) < day_progress(step + 1));
        }
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let ramp = SKY[0];
        assert_eq!(ramp.at(0.0), Hsl::new(220, 35, 10));
        assert_eq!(ramp.at(1.0), Hsl::new(200, 75, 80));
        assert_eq!(ramp.at(0.5), Hsl::new(210, 55, 45));
        assert_eq!(ramp.at(1.5), ramp.at(1.0));
    }

    #[test]
    fn hsl_renders_as_css() {
        assert_eq!(Hsl::new(45, 95, 70).to_string(), "hsl(45, 95%, 70%)");
    }

    #[test]
    fn theme_at_night_and_day() {
        let night = SceneTheme::at(day_progress(0));
        assert_eq!(night.sky[0].to_string(), "hsl(220, 35%, 10%)");
        assert!(close(night.stars, 0.4));
        assert!(close(night.sun.core, 0.3));

        let day = SceneTheme::at(day_progress(5));
        assert_eq!(day.ground[1], Hsl::new(110, 35, 35));
        assert_eq!(day.stars, 0.0);
        assert!(close(day.sun.halo, 0.04 + 0.7 * 0.3));
        assert!(close(day.sun_glow, 0.3));
        assert!(close(day.window_glow[0], 0.3));
    }

    #[test]
    fn layers_follow_threshold_table() {
        assert_eq!(visible_layers(0), Vec::<Layer>::new());
        assert_eq!(visible_layers(1), vec![Layer::Posts]);
        assert_eq!(visible_layers(3), vec![Layer::Posts, Layer::Panels, Layer::Wiring]);
        assert_eq!(
            visible_layers(4),
            vec![
                Layer::HousePanel,
                Layer::Posts,
                Layer::Panels,
                Layer::Wiring,
                Layer::Inverter,
                Layer::EnergyFlow,
            ]
        );
        assert_eq!(visible_layers(5).len(), LAYER_THRESHOLDS.len());
    }

    #[test]
    fn layers_once_shown_stay_shown() {
        for (layer, at) in LAYER_THRESHOLDS {
            assert_eq!(layer.threshold(), at);
            for step in 0..=5u8 {
                assert_eq!(layer.is_visible_at(step), step >= at.get());
                assert_eq!(visible_layers(step).contains(&layer), step >= at.get());
            }
        }
    }
}
