//! Property tests for the command dialect and the line sweep.

use std::path::PathBuf;

use pf_engine::{
    CircuitSnapshot, DssCommand, LineElement, Lines, PowerFlowEngine, ReplayEngine,
};
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = LineElement> {
    ("[a-z][a-z0-9_]{0,8}", 1usize..=4).prop_flat_map(|(name, phases)| {
        prop::collection::vec(0.0f64..500.0, 2 * phases..=2 * phases + 4).prop_map(
            move |currents_mag_ang| LineElement {
                name: name.clone(),
                phases,
                currents_mag_ang,
            },
        )
    })
}

fn solved_engine(lines: Vec<LineElement>) -> ReplayEngine {
    let snapshot = CircuitSnapshot {
        circuit: "prop".to_string(),
        converged: true,
        nodes: Vec::new(),
        lines,
    };
    let mut engine = ReplayEngine::new().with_circuit("prop.dss", snapshot);
    engine.execute(&DssCommand::compile("prop.dss")).unwrap();
    engine.execute(&DssCommand::Solve).unwrap();
    engine
}

proptest! {
    #[test]
    fn compile_display_parses_back(path in "[A-Za-z0-9_:./\\\\-]([A-Za-z0-9_ :./\\\\-]{0,30}[A-Za-z0-9_.-])?") {
        let command = DssCommand::compile(PathBuf::from(&path));
        let parsed = DssCommand::parse(&command.to_string()).unwrap();
        prop_assert_eq!(parsed, command);
    }

    #[test]
    fn sweep_visits_every_line_once_in_order(lines in prop::collection::vec(line_strategy(), 0..12)) {
        let mut engine = solved_engine(lines.clone());

        let mut sweep = Lines::new(&mut engine);
        let swept: Vec<LineElement> = sweep.by_ref().collect::<Result<_, _>>().unwrap();
        prop_assert!(sweep.next().is_none());
        prop_assert_eq!(&swept, &lines);

        let again: Vec<LineElement> = Lines::new(&mut engine).collect::<Result<_, _>>().unwrap();
        prop_assert_eq!(again, swept);
    }
}
