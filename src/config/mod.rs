//! Configuration and parameters
//!
//! Constants, kernel tunables and the `configure` command.

pub mod constants;
pub mod sim_params;

pub use constants::*;
pub use sim_params::*;
