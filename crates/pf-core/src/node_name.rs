//! Engine node-name encoding.
//!
//! Node names are reported as `<bus>.<terminal>`, e.g. `"sourcebus.2"`. A name
//! without a dot refers to the bus itself and implies terminal 1.

use core::fmt;

use crate::{CoreError, CoreResult, Phase};

/// A node name split into its bus identifier and phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeName {
    pub bus: String,
    pub phase: Phase,
}

impl NodeName {
    /// Split `raw` on the first `.`.
    ///
    /// Fails with [`CoreError::MalformedName`] naming `raw` when the bus segment is
    /// empty or the suffix is not a positive terminal index.
    pub fn parse(raw: &str) -> CoreResult<Self> {
        let (bus, phase) = match raw.split_once('.') {
            Some((bus, suffix)) => (bus, Phase::from_suffix(suffix, raw)?),
            None => (raw, Phase::REFERENCE),
        };

        if bus.trim().is_empty() {
            return Err(CoreError::MalformedName {
                name: raw.to_string(),
                reason: "missing bus identifier",
            });
        }

        Ok(Self {
            bus: bus.to_string(),
            phase,
        })
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.bus, self.phase.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_name_splits_bus_and_phase() {
        let n = NodeName::parse("Bus5.2").unwrap();
        assert_eq!(n.bus, "Bus5");
        assert_eq!(n.phase.label(), "Fase 2");
    }

    #[test]
    fn bare_name_is_phase_one() {
        let n = NodeName::parse("Bus5").unwrap();
        assert_eq!(n.bus, "Bus5");
        assert_eq!(n.phase.label(), "Fase 1");
    }

    #[test]
    fn empty_bus_is_malformed() {
        for raw in ["", ".1", "   .2"] {
            let err = NodeName::parse(raw).unwrap_err();
            assert!(matches!(err, CoreError::MalformedName { .. }), "{raw:?}");
        }
    }

    #[test]
    fn error_names_offending_entry() {
        let err = NodeName::parse("feeder.a").unwrap_err();
        assert!(err.to_string().contains("feeder.a"));
    }

    #[test]
    fn only_first_dot_splits() {
        // "x.1.2" leaves "1.2" as the suffix, which is not a terminal index.
        assert!(NodeName::parse("x.1.2").is_err());
    }

    #[test]
    fn display_round_trips() {
        let n = NodeName::parse("sourcebus.3").unwrap();
        assert_eq!(NodeName::parse(&n.to_string()).unwrap(), n);
    }
}
