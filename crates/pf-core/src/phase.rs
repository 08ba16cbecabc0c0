use core::fmt;
use core::num::NonZeroU8;

use crate::{CoreError, CoreResult};

/// Phase (terminal) index of a node or line conductor.
///
/// - stored as the 1-based terminal index the engine reports
/// - `NonZero` keeps `Option<Phase>` the same size as `Phase`
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Phase(NonZeroU8);

impl Phase {
    /// Phase 1, used for the voltage console summary.
    pub const REFERENCE: Phase = Phase(NonZeroU8::MIN);

    /// Phase for the 0-based per-phase position `position` (position 0 is phase 1).
    pub fn from_position(position: usize) -> CoreResult<Self> {
        u8::try_from(position + 1)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(CoreError::PhaseOutOfRange { position })
    }

    /// Parse the terminal suffix of a node name (`"2"` in `"bus.2"`).
    pub fn from_suffix(suffix: &str, name: &str) -> CoreResult<Self> {
        let malformed = |reason| CoreError::MalformedName {
            name: name.to_string(),
            reason,
        };
        if suffix.is_empty() {
            return Err(malformed("empty terminal suffix"));
        }
        let index: u8 = suffix
            .parse()
            .map_err(|_| malformed("terminal suffix is not a small positive integer"))?;
        NonZeroU8::new(index)
            .map(Self)
            .ok_or_else(|| malformed("terminal suffix must be positive"))
    }

    /// 1-based phase number.
    pub fn number(self) -> u8 {
        self.0.get()
    }

    pub fn is_reference(self) -> bool {
        self == Self::REFERENCE
    }

    /// Grouping label shared by the voltage and current tables.
    pub fn label(self) -> String {
        format!("Fase {}", self.number())
    }
}

impl TryFrom<u8> for Phase {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(CoreError::PhaseOutOfRange { position: 0 })
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase.number()
    }
}

impl fmt::Debug for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phase({})", self.number())
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fase {}", self.number())
    }
}
