use std::rc::Rc;
use tracing::{debug, info};
use yew::Reducible;

use super::step::StepId;
use crate::error::WalkthroughError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkthroughAction {
    Start,
    Next,
    Back,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Step 0, tutorial overlay showing.
    NotStarted,
    InProgress(StepId),
    /// Step 5.
    Complete,
}

/// The walkthrough's only mutable state. Fields are private so the step can
/// only move through [`WalkthroughState::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkthroughState {
    current_step: u8,
    tutorial_visible: bool,
}

impl Default for WalkthroughState {
    fn default() -> Self {
        Self {
            current_step: 0,
            tutorial_visible: true,
        }
    }
}

impl WalkthroughState {
    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn tutorial_visible(&self) -> bool {
        self.tutorial_visible
    }

    pub fn phase(&self) -> Phase {
        match StepId::try_from(self.current_step) {
            Err(_) => Phase::NotStarted,
            Ok(StepId::LAST) => Phase::Complete,
            Ok(id) => Phase::InProgress(id),
        }
    }

    /// Returns the state after `action`, or why `action` has no transition here.
    ///
    /// `Back` on the first step is accepted and leaves the state unchanged;
    /// `Next` on the last step is rejected.
    pub fn apply(self, action: WalkthroughAction) -> Result<Self, WalkthroughError> {
        use WalkthroughAction::*;
        let reject = Err(WalkthroughError::NoTransition {
            action,
            step: self.current_step,
        });
        match (self.phase(), action) {
            (Phase::NotStarted, Start) => Ok(Self {
                current_step: StepId::FIRST.get(),
                tutorial_visible: false,
            }),
            (Phase::InProgress(id), Next) => Ok(Self {
                current_step: id.get() + 1,
                ..self
            }),
            (Phase::InProgress(_) | Phase::Complete, Back) => Ok(Self {
                current_step: self.current_step.saturating_sub(1).max(StepId::FIRST.get()),
                ..self
            }),
            (Phase::Complete, Restart) => Ok(Self::default()),
            _ => reject,
        }
    }
}

impl Reducible for WalkthroughState {
    type Action = WalkthroughAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Ok(next) if next == *self => self,
            Ok(next) => {
                info!(?action, from = self.current_step, to = next.current_step, "walkthrough step changed");
                Rc::new(next)
            }
            Err(err) => {
                debug!(%err, "ignoring walkthrough intent");
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use WalkthroughAction::*;

    fn run(actions: &[WalkthroughAction]) -> WalkthroughState {
        actions.iter().fold(WalkthroughState::default(), |state, action| {
            state.apply(*action).unwrap_or(state)
        })
    }

    #[test]
    fn starts_not_started_with_tutorial() {
        let state = WalkthroughState::default();
        assert_eq!(state.current_step(), 0);
        assert!(state.tutorial_visible());
        assert_eq!(state.phase(), Phase::NotStarted);
    }

    #[test]
    fn start_then_four_nexts_completes() {
        let started = WalkthroughState::default().apply(Start).unwrap();
        assert_eq!(started.current_step(), 1);
        assert!(!started.tutorial_visible());

        let done = run(&[Start, Next, Next, Next, Next]);
        assert_eq!(done.current_step(), 5);
        assert_eq!(done.phase(), Phase::Complete);
    }

    #[test]
    fn next_at_last_step_is_rejected() {
        let done = run(&[Start, Next, Next, Next, Next]);
        assert_eq!(
            done.apply(Next),
            Err(WalkthroughError::NoTransition { action: Next, step: 5 })
        );
    }

    #[test]
    fn back_at_first_step_is_a_no_op() {
        let first = run(&[Start]);
        assert_eq!(first.apply(Back), Ok(first));
    }

    #[test]
    fn back_from_complete_returns_to_in_progress() {
        let state = run(&[Start, Next, Next, Next, Next, Back]);
        assert_eq!(state.current_step(), 4);
        assert_eq!(state.phase(), Phase::InProgress(StepId::literal(4)));
    }

    #[test]
    fn restart_only_from_complete() {
        let mid = run(&[Start, Next]);
        assert!(mid.apply(Restart).is_err());

        let restarted = run(&[Start, Next, Next, Next, Next, Restart]);
        assert_eq!(restarted, WalkthroughState::default());
    }

    #[test]
    fn intents_before_start_are_rejected() {
        let fresh = WalkthroughState::default();
        for action in [Next, Back, Restart] {
            assert!(fresh.apply(action).is_err(), "{action:?} accepted before start");
        }
        assert!(run(&[Start]).apply(Start).is_err());
    }

    #[test]
    fn step_never_leaves_range() {
        let script = [Start, Back, Back, Next, Next, Next, Next, Next, Next, Back, Restart, Next];
        let mut state = WalkthroughState::default();
        for action in script {
            state = state.apply(action).unwrap_or(state);
            assert!(state.current_step() <= 5);
        }
    }

    #[test]
    fn reducer_keeps_state_on_rejection() {
        let done = Rc::new(run(&[Start, Next, Next, Next, Next]));
        let after = done.clone().reduce(Next);
        assert!(Rc::ptr_eq(&done, &after));

        let back = done.reduce(Back);
        assert_eq!(back.current_step(), 4);
    }
}
