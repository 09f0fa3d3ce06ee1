use thiserror::Error;

use crate::model::WalkthroughAction;

/// Failures at the walkthrough's state seams. None of these reach the user:
/// the reducer keeps its previous state when a transition is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalkthroughError {
    #[error("step {0} is outside 1..=5")]
    StepOutOfRange(u8),
    #[error("no {action:?} transition from step {step}")]
    NoTransition { action: WalkthroughAction, step: u8 },
}

/// Problems with the optional in-page settings block.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings block is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid log filter '{filter}': {source}")]
    LogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}
