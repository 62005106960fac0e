// Physical and model constants for the gas box
use crate::math::Real;

// Ideal gas
pub const IDEAL_GAS_CONSTANT: Real = 8.314; // J/(mol·K)
pub const STANDARD_PRESSURE_KPA: Real = 101.325;
pub const MOLES_PER_PARTICLE: Real = 0.01;

// Container geometry: pixels -> meters, plus an abstract depth for 3D volume
pub const PIXELS_PER_METER: Real = 1000.0;
pub const DEPTH_FACTOR: Real = 0.1;

// Particles
pub const MASS_DENSITY: Real = 0.5;
pub const MIN_PARTICLE_RADIUS: Real = 0.5;
pub const MAX_SPEED_DIVISOR: Real = 50.0;

// Defaults restored by reset
pub const DEFAULT_TEMPERATURE_K: Real = 300.0;
pub const DEFAULT_CONTAINER_WIDTH: Real = 800.0;
pub const DEFAULT_CONTAINER_HEIGHT: Real = 400.0;
pub const DEFAULT_STRENGTH_KPA: Real = 1000.0;

// Lower bound applied to temperature, dimensions and strength
pub const MIN_CONFIG_VALUE: Real = 1.0;

// Debris must keep fading, so its decay rate never reaches zero
pub const MIN_DECAY_RATE: Real = 1e-4;

// Guard against dividing by a vanishing container volume
pub const VOLUME_EPSILON: Real = 1e-12;
