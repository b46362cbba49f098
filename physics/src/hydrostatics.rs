use crate::{FluidProperties, PhysicsErrors, require_non_negative, require_positive};

/// Buoyant force (N) on a body displacing `volume` (m^3) of a fluid with
/// density `fluid_density` (kg/m^3). Only gravity is taken from `fluid`.
pub fn buoyancy(
    volume: f64,
    fluid_density: f64,
    fluid: &FluidProperties,
) -> Result<f64, PhysicsErrors> {
    let volume = require_non_negative(volume, PhysicsErrors::NegativeVolume)?;
    let fluid_density =
        require_positive(fluid_density, PhysicsErrors::DensityLessThanOrEqualToZero)?;
    Ok(fluid_density * volume * fluid.gravity)
}

/// Archimedes check: true when the buoyant force of the displaced volume
/// exceeds the weight of `mass` (kg).
pub fn will_it_float(
    volume: f64,
    mass: f64,
    fluid: &FluidProperties,
) -> Result<bool, PhysicsErrors> {
    let volume = require_non_negative(volume, PhysicsErrors::NegativeVolume)?;
    let mass = require_positive(mass, PhysicsErrors::MassLessThanOrEqualToZero)?;
    let buoyant_force = volume * fluid.density * fluid.gravity;
    let weight = mass * fluid.gravity;
    Ok(buoyant_force > weight)
}

/// Absolute pressure (Pa) at `depth` (m) below the surface.
pub fn pressure(depth: f64, fluid: &FluidProperties) -> Result<f64, PhysicsErrors> {
    let depth = require_non_negative(depth, PhysicsErrors::NegativeDepth)?;
    Ok(fluid.density * fluid.gravity * depth + fluid.atmospheric_pressure)
}
