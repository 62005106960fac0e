//! Gas-in-a-box kernel: particles bounce in a container, an ideal-gas pressure
//! is recomputed every frame, and exceeding the container's strength ruptures
//! it exactly once.
//!
//! [`GasBoxPlugin`] drives the kernel from Bevy's `Update` schedule; the kernel
//! itself ([`SimulationState`]) is plain data and can be stepped directly.

use bevy::prelude::*;

pub mod config;
pub mod core;
pub mod error;
pub mod gas;
pub mod math;
pub mod solver;

// Public re-exports for clean API
pub use config::{ConfigUpdate, DebrisContainment, SimParams, SpawnPattern};
pub use core::{
    Container, ExplosionPhase, ExplosionStats, Fragment, Particle, ParticleKind, SimCommand,
    SimulationState, StepReport,
};
pub use gas::{GasLawReadout, PressureBand};

use crate::core::{apply_sim_commands, step_simulation};

/// Inserts [`SimulationState`] and steps it once per frame after applying the
/// frame's [`SimCommand`]s.
#[derive(Default)]
pub struct GasBoxPlugin {
    pub params: SimParams,
    /// Fixed seed for a reproducible run; OS entropy when `None`.
    pub seed: Option<u64>,
}

impl Plugin for GasBoxPlugin {
    fn build(&self, app: &mut App) {
        let state = match self.seed {
            Some(seed) => SimulationState::with_seed(self.params.clone(), seed),
            None => SimulationState::new(self.params.clone()),
        };
        app.insert_resource(state)
            .add_message::<SimCommand>()
            .add_systems(Update, (apply_sim_commands, step_simulation).chain());
    }
}
