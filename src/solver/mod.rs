// src/solver/mod.rs
pub mod boundary;
pub mod collision;
pub mod kinematics;

pub use boundary::contain_within_bounds;
pub use collision::{Contact, resolve_collisions, resolve_pair};
pub use kinematics::{integrate, integrate_all};
