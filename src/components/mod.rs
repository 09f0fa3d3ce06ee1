pub mod app;
pub mod cost_panel;
pub mod incentives_summary;
pub mod progress_header;
pub mod solar_scene;
pub mod step_navigation;
pub mod tutorial_overlay;

pub use app::{App, AppProps};
