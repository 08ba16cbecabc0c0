//! pf-core: shared foundation for the power-flow result viewer.
//!
//! Contains:
//! - phase (terminal index / phase labels)
//! - node_name (engine node-name encoding `<bus>.<terminal>`)
//! - units (uom SI types + constructors)
//! - numeric (finite / non-negative magnitude checks)
//! - error (shared error types)

pub mod error;
pub mod node_name;
pub mod numeric;
pub mod phase;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use node_name::NodeName;
pub use numeric::*;
pub use phase::Phase;
pub use units::*;
