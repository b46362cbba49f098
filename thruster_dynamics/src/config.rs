//! Simulation inputs with documented defaults, and RON scenario documents.
//!
//! A scenario document holds everything one [`simulate_trajectory`] call
//! needs. Any `config` field left out takes its default:
//!
//! ```ron
//! Scenario(
//!     thrust: [40.0, 80.0, 120.0, 160.0],
//!     cant_angle: 1.0471975511965976,
//!     half_length: 3.0,
//!     half_width: 2.0,
//!     config: (dt: 0.05, t_final: 2.0),
//! )
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    BodyParameters, DEFAULT_INERTIA, DEFAULT_MASS, DynamicsErrors, Trajectory,
    simulate_trajectory, validation,
};

/// Mass properties, time grid and initial pose of one simulation.
///
/// | field   | default |
/// |---------|---------|
/// | mass    | 100     |
/// | inertia | 100     |
/// | dt      | 0.1     |
/// | t_final | 10      |
/// | x0, y0  | 0       |
/// | theta0  | 0       |
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub mass: f64,    // kg
    pub inertia: f64, // kg m^2
    pub dt: f64,      // sec
    pub t_final: f64, // sec
    pub x0: f64,      // m
    pub y0: f64,      // m
    pub theta0: f64,  // rad
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            inertia: DEFAULT_INERTIA,
            dt: 0.1,
            t_final: 10.0,
            x0: 0.0,
            y0: 0.0,
            theta0: 0.0,
        }
    }
}

impl SimulationConfig {
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = inertia;
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_t_final(mut self, t_final: f64) -> Self {
        self.t_final = t_final;
        self
    }

    pub fn with_initial_pose(mut self, x0: f64, y0: f64, theta0: f64) -> Self {
        self.x0 = x0;
        self.y0 = y0;
        self.theta0 = theta0;
        self
    }

    /// Checks every parameter, returning the validated mass properties.
    pub fn validate(&self) -> Result<BodyParameters, DynamicsErrors> {
        let body = BodyParameters::new(self.mass, self.inertia)?;
        validation::validate_step_size(self.dt)?;
        validation::validate_horizon(self.t_final)?;
        Ok(body)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// One force per thruster, in mounting order.
    pub thrust: Vec<f64>,
    pub cant_angle: f64,  // rad
    pub half_length: f64, // m
    pub half_width: f64,  // m
    #[serde(default)]
    pub config: SimulationConfig,
}

impl Scenario {
    pub fn from_ron(s: &str) -> Result<Self, DynamicsErrors> {
        Ok(ron::from_str(s)?)
    }

    pub fn simulate(&self) -> Result<Trajectory, DynamicsErrors> {
        simulate_trajectory(
            &self.thrust,
            self.cant_angle,
            self.half_length,
            self.half_width,
            &self.config,
        )
    }
}
