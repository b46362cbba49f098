//! Planar rigid-body dynamics of a four-thruster underwater vehicle.
//!
//! Forces from the four thrusters are resolved into a world-frame linear
//! acceleration ([`allocation`]) and an angular acceleration about the
//! vertical axis ([`torque`]), and an explicit-Euler loop ([`integrator`])
//! turns a constant command into a [`Trajectory`].

use nalgebra::Vector2;
use physics::PhysicsErrors;
use thiserror::Error;

pub mod allocation;
pub mod body;
pub mod command;
pub mod config;
pub mod integrator;
pub mod layout;
pub mod torque;
pub mod trajectory;
pub mod validation;

pub use allocation::ThrustAllocator;
pub use body::{BodyParameters, DEFAULT_INERTIA, DEFAULT_MASS};
pub use command::{THRUSTER_COUNT, ThrusterCommand};
pub use config::{Scenario, SimulationConfig};
pub use integrator::{KinematicIntegrator, MAX_SAMPLES};
pub use layout::{Mount, Thruster, ThrusterGeometry, ThrusterLayout};
pub use torque::TorqueAggregator;
pub use trajectory::{BodyState, Trajectory};

#[derive(Debug, Error)]
pub enum DynamicsErrors {
    #[error("thruster command must contain exactly 4 values, got {0}")]
    InvalidConfiguration(usize),
    #[error("{0}")]
    InvalidParameter(#[from] ParameterErrors),
    #[error("{0}")]
    Physics(#[from] PhysicsErrors),
    #[error("{0}")]
    Scenario(#[from] ron::error::SpannedError),
}

#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ParameterErrors {
    #[error("half-length must be finite and greater than zero, got {0}")]
    HalfLengthLessThanOrEqualToZero(f64),
    #[error("half-width must be finite and greater than zero, got {0}")]
    HalfWidthLessThanOrEqualToZero(f64),
    #[error("final time must be finite and greater than zero, got {0}")]
    HorizonLessThanOrEqualToZero(f64),
    #[error("moment of inertia must be finite and greater than zero, got {0}")]
    InertiaLessThanOrEqualToZero(f64),
    #[error("mass must be finite and greater than zero, got {0}")]
    MassLessThanOrEqualToZero(f64),
    #[error("time step must be finite and greater than zero, got {0}")]
    StepSizeLessThanOrEqualToZero(f64),
    #[error("time grid t_final / dt = {0} exceeds the limit of {max} samples", max = crate::MAX_SAMPLES)]
    TooManySamples(f64),
}

/// World-frame linear acceleration produced by `thrust` at heading `theta`.
///
/// # Arguments
///
/// * `thrust` - The four thruster forces, in mounting order (see [`Mount`]).
/// * `cant_angle` - Thruster cant angle (rad).
/// * `theta` - Vehicle heading (rad).
/// * `mass` - Vehicle mass, [`DEFAULT_MASS`] when the caller has none.
pub fn resolve_linear_acceleration(
    thrust: &[f64],
    cant_angle: f64,
    theta: f64,
    mass: f64,
) -> Result<Vector2<f64>, DynamicsErrors> {
    let command = ThrusterCommand::new(thrust)?;
    let allocator = ThrustAllocator::new(cant_angle, mass)?;
    Ok(allocator.acceleration(&command, theta))
}

/// Angular acceleration about the vertical axis produced by `thrust`.
///
/// `inertia` is [`DEFAULT_INERTIA`] when the caller has none.
pub fn resolve_angular_acceleration(
    thrust: &[f64],
    cant_angle: f64,
    half_length: f64,
    half_width: f64,
    inertia: f64,
) -> Result<f64, DynamicsErrors> {
    let command = ThrusterCommand::new(thrust)?;
    let geometry = ThrusterGeometry::new(cant_angle, half_length, half_width)?;
    let aggregator = TorqueAggregator::new(&ThrusterLayout::new(&geometry), inertia)?;
    aggregator.angular_acceleration(&command)
}

/// Integrates the vehicle under a constant thruster command.
///
/// Every input is validated before any state is computed, so an error never
/// comes with a partial trajectory.
pub fn simulate_trajectory(
    thrust: &[f64],
    cant_angle: f64,
    half_length: f64,
    half_width: f64,
    config: &SimulationConfig,
) -> Result<Trajectory, DynamicsErrors> {
    let command = ThrusterCommand::new(thrust)?;
    let geometry = ThrusterGeometry::new(cant_angle, half_length, half_width)?;
    let integrator = KinematicIntegrator::new(&ThrusterLayout::new(&geometry), config)?;
    integrator.simulate(&command)
}
