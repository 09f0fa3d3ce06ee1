//! Walkthrough domain: the cost table, scene derivation, and the step state machine.

pub mod cost;
pub mod scene;
pub mod snapshot;
pub mod step;
pub mod walkthrough;

pub use scene::{Layer, SceneTheme};
pub use snapshot::{IncentiveSummary, WalkthroughSnapshot};
pub use step::{StepId, StepStatus};
pub use walkthrough::{WalkthroughAction, WalkthroughState};
