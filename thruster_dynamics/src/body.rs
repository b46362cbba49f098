use serde::{Deserialize, Serialize};

use crate::{DynamicsErrors, validation};

/// kg
pub const DEFAULT_MASS: f64 = 100.0;
/// kg m^2
pub const DEFAULT_INERTIA: f64 = 100.0;

/// Planar mass properties of the vehicle.
/// Mass, and moment of inertia about the vertical axis through the center of mass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyParameters {
    mass: f64,
    inertia: f64,
}

impl Default for BodyParameters {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            inertia: DEFAULT_INERTIA,
        }
    }
}

impl BodyParameters {
    pub fn new(mass: f64, inertia: f64) -> Result<Self, DynamicsErrors> {
        Ok(Self {
            mass: validation::validate_mass(mass)?,
            inertia: validation::validate_inertia(inertia)?,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inertia(&self) -> f64 {
        self.inertia
    }
}
