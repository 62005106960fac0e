pub mod container;
pub mod explosion;
pub mod fragment;
pub mod particle;
pub mod particle_set;
pub mod random;
pub mod sim_state;

pub use container::Container;
pub use explosion::{ExplosionPhase, ExplosionStats, explosion_power};
pub use fragment::Fragment;
pub use particle::{Particle, ParticleKind};
pub use particle_set::ParticleSet;
pub use random::{RandomSource, RngSource, SequenceSource};
pub use sim_state::{
    SimCommand, SimulationState, StepReport, apply_sim_commands, step_simulation,
};
