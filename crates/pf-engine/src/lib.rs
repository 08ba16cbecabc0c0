//! pf-engine: the boundary to the power-flow simulation engine.
//!
//! Provides:
//! - `DssCommand`: the engine's text command dialect (`compile "<path>"`, `solve`)
//! - `PowerFlowEngine`: an explicit engine session handle
//! - `LineCursor` / `Lines`: the engine's first/next line cursor and the lazy
//!   iterator built on top of it
//! - `ReplayEngine`: a backend that serves recorded circuit results
//!
//! # Architecture
//!
//! The solve itself happens inside the engine; this crate only issues commands and
//! reads results. Everything downstream (table builders, charts) talks to the
//! `PowerFlowEngine` trait, so a recorded circuit and a live engine are
//! interchangeable.
//!
//! # Example
//!
//! ```no_run
//! use pf_engine::{DssCommand, Lines, PowerFlowEngine, ReplayEngine};
//!
//! let mut engine = ReplayEngine::new();
//! engine.execute(&DssCommand::compile("circuits/example1.yaml")).unwrap();
//! engine.execute(&DssCommand::Solve).unwrap();
//!
//! if engine.converged().unwrap() {
//!     for line in Lines::new(&mut engine) {
//!         let line = line.unwrap();
//!         println!("{}: {} phases", line.name, line.phases);
//!     }
//! }
//! ```

pub mod command;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod replay;
pub mod snapshot;

pub use command::DssCommand;
pub use cursor::{LineCursor, LineElement, Lines};
pub use engine::{NodeVoltage, PowerFlowEngine};
pub use error::{EngineError, EngineResult};
pub use replay::ReplayEngine;
pub use snapshot::CircuitSnapshot;
