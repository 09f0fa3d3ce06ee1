use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WalkthroughError;

/// Identity of one installation phase, always within 1..=5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StepId(u8);

impl StepId {
    pub const FIRST: StepId = StepId(1);
    pub const LAST: StepId = StepId(5);

    /// Compile-time constructor for the static step table.
    pub(crate) const fn literal(n: u8) -> StepId {
        assert!(n >= 1 && n <= 5);
        StepId(n)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = StepId> {
        (Self::FIRST.0..=Self::LAST.0).map(StepId)
    }
}

impl TryFrom<u8> for StepId {
    type Error = WalkthroughError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&n) {
            Ok(StepId(n))
        } else {
            Err(WalkthroughError::StepOutOfRange(n))
        }
    }
}

impl From<StepId> for u8 {
    fn from(id: StepId) -> u8 {
        id.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a checklist row relates to the walkthrough's current step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

impl StepStatus {
    pub fn of(id: StepId, current_step: u8) -> StepStatus {
        match id.get().cmp(&current_step) {
            std::cmp::Ordering::Less => StepStatus::Done,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }

    /// Done and active rows list their line items; pending rows stay collapsed.
    pub fn is_expanded(self) -> bool {
        !matches!(self, StepStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_accepts_one_through_five() {
        let ids: Vec<u8> = StepId::all().map(u8::from).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        for n in 1..=5 {
            assert_eq!(StepId::try_from(n).map(StepId::get), Ok(n));
        }
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(StepId::try_from(0), Err(WalkthroughError::StepOutOfRange(0)));
        assert_eq!(StepId::try_from(6), Err(WalkthroughError::StepOutOfRange(6)));
    }

    #[test]
    fn deserialize_validates_range() {
        let ok: StepId = serde_json::from_str("3").unwrap();
        assert_eq!(ok.get(), 3);
        assert!(serde_json::from_str::<StepId>("9").is_err());
    }

    #[test]
    fn status_relative_to_current_step() {
        let three = StepId::literal(3);
        assert_eq!(StepStatus::of(three, 0), StepStatus::Pending);
        assert_eq!(StepStatus::of(three, 2), StepStatus::Pending);
        assert_eq!(StepStatus::of(three, 3), StepStatus::Active);
        assert_eq!(StepStatus::of(three, 5), StepStatus::Done);
        assert!(StepStatus::Done.is_expanded());
        assert!(StepStatus::Active.is_expanded());
        assert!(!StepStatus::Pending.is_expanded());
    }
}
