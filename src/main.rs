mod components;
mod config;
mod error;
mod logging;
mod model;
mod util;

use components::{App, AppProps};
use config::Settings;
use tracing::{info, warn};

fn main() {
    let loaded = Settings::from_document();
    let settings = match &loaded {
        Ok(Some(s)) => s.clone(),
        _ => Settings::default(),
    };
    logging::init(settings.env_filter().unwrap_or_else(|_| logging::default_filter()));

    match loaded {
        Ok(Some(_)) => info!(?settings, "loaded page settings"),
        Ok(None) => info!("no page settings; using defaults"),
        Err(err) => warn!(%err, "ignoring page settings"),
    }

    yew::Renderer::<App>::with_props(AppProps { settings }).render();
}
