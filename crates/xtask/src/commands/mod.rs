//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod dump;
mod gradient;
mod parse_value;

pub use dump::Dump;
pub use gradient::Gradient;
pub use parse_value::ParseValue;
