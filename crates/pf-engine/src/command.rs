//! The engine's text command dialect.
//!
//! Only the two directives a study needs are understood:
//!
//! ```text
//! compile "C:\circuits\feeder.dss"
//! solve
//! ```
//!
//! Verbs are case-insensitive. The compile target may be bare or wrapped in any of
//! the engine's quote pairs: `"…"`, `'…'`, `(…)`, `[…]`.

use core::fmt;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult};

const QUOTE_PAIRS: [(char, char); 4] = [('"', '"'), ('\'', '\''), ('(', ')'), ('[', ']')];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DssCommand {
    /// Load a circuit definition and make it the active circuit.
    Compile { path: PathBuf },
    /// Run the power flow on the active circuit.
    Solve,
}

impl DssCommand {
    pub fn compile(path: impl Into<PathBuf>) -> Self {
        Self::Compile { path: path.into() }
    }

    pub fn parse(line: &str) -> EngineResult<Self> {
        let trimmed = line.trim();
        let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (trimmed, ""),
        };

        let invalid = |reason| EngineError::InvalidCommand {
            command: trimmed.to_string(),
            reason,
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(invalid("empty command")),
            "compile" => {
                let target = unquote(rest).trim();
                if target.is_empty() {
                    return Err(invalid("compile needs a circuit path"));
                }
                Ok(Self::compile(target))
            }
            "solve" if rest.is_empty() => Ok(Self::Solve),
            "solve" => Err(invalid("solve options are not supported")),
            _ => Err(EngineError::UnsupportedCommand {
                command: trimmed.to_string(),
            }),
        }
    }
}

fn unquote(arg: &str) -> &str {
    for (open, close) in QUOTE_PAIRS {
        if let Some(inner) = arg.strip_prefix(open).and_then(|s| s.strip_suffix(close)) {
            return inner;
        }
    }
    arg
}

impl fmt::Display for DssCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compile { path } => write!(f, "compile \"{}\"", path.display()),
            Self::Solve => write!(f, "solve"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_windows_path_in_quotes() {
        let cmd =
            DssCommand::parse(r#"compile "C:\Program Files\OpenDSS\Examples\Manual\Example1.DSS""#)
                .unwrap();
        assert_eq!(
            cmd,
            DssCommand::compile(r"C:\Program Files\OpenDSS\Examples\Manual\Example1.DSS")
        );
    }

    #[test]
    fn accepts_every_quote_pair_and_bare_paths() {
        for line in [
            "compile feeder.dss",
            "compile \"feeder.dss\"",
            "compile 'feeder.dss'",
            "compile (feeder.dss)",
            "compile [feeder.dss]",
            "  COMPILE   feeder.dss  ",
        ] {
            assert_eq!(
                DssCommand::parse(line).unwrap(),
                DssCommand::compile("feeder.dss"),
                "{line}"
            );
        }
    }

    #[test]
    fn solve_is_case_insensitive() {
        assert_eq!(DssCommand::parse("solve").unwrap(), DssCommand::Solve);
        assert_eq!(DssCommand::parse("Solve").unwrap(), DssCommand::Solve);
    }

    #[test]
    fn rejects_unknown_and_incomplete_commands() {
        assert!(matches!(
            DssCommand::parse("show voltages"),
            Err(EngineError::UnsupportedCommand { .. })
        ));
        assert!(matches!(
            DssCommand::parse("compile \"\""),
            Err(EngineError::InvalidCommand { .. })
        ));
        assert!(matches!(
            DssCommand::parse("compile"),
            Err(EngineError::InvalidCommand { .. })
        ));
        assert!(matches!(
            DssCommand::parse("   "),
            Err(EngineError::InvalidCommand { .. })
        ));
        assert!(matches!(
            DssCommand::parse("solve mode=daily"),
            Err(EngineError::InvalidCommand { .. })
        ));
    }

    #[test]
    fn display_is_engine_dialect() {
        let cmd = DssCommand::compile(r"C:\x y\a.dss");
        assert_eq!(cmd.to_string(), r#"compile "C:\x y\a.dss""#);
        assert_eq!(DssCommand::parse(&cmd.to_string()).unwrap(), cmd);
        assert_eq!(DssCommand::Solve.to_string(), "solve");
    }
}
