//! Eager checks shared by every entry point.
//!
//! A physical parameter is only accepted when it is finite and strictly
//! positive, so NaN and infinities are rejected alongside zero and negatives.

use crate::{DynamicsErrors, ParameterErrors, command::THRUSTER_COUNT};

pub fn validate_thruster_count(count: usize) -> Result<(), DynamicsErrors> {
    if count != THRUSTER_COUNT {
        tracing::debug!(count, "rejected thruster command");
        return Err(DynamicsErrors::InvalidConfiguration(count));
    }
    Ok(())
}

pub fn validate_mass(mass: f64) -> Result<f64, DynamicsErrors> {
    require_positive(mass, ParameterErrors::MassLessThanOrEqualToZero)
}

pub fn validate_inertia(inertia: f64) -> Result<f64, DynamicsErrors> {
    require_positive(inertia, ParameterErrors::InertiaLessThanOrEqualToZero)
}

pub fn validate_half_length(half_length: f64) -> Result<f64, DynamicsErrors> {
    require_positive(half_length, ParameterErrors::HalfLengthLessThanOrEqualToZero)
}

pub fn validate_half_width(half_width: f64) -> Result<f64, DynamicsErrors> {
    require_positive(half_width, ParameterErrors::HalfWidthLessThanOrEqualToZero)
}

pub fn validate_step_size(dt: f64) -> Result<f64, DynamicsErrors> {
    require_positive(dt, ParameterErrors::StepSizeLessThanOrEqualToZero)
}

pub fn validate_horizon(t_final: f64) -> Result<f64, DynamicsErrors> {
    require_positive(t_final, ParameterErrors::HorizonLessThanOrEqualToZero)
}

fn require_positive(
    value: f64,
    err: fn(f64) -> ParameterErrors,
) -> Result<f64, DynamicsErrors> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        let err = err(value);
        tracing::debug!(%err, "rejected parameter");
        Err(err.into())
    }
}
