use thiserror::Error;

/// Errors reported by the cable engine.
///
/// Everything except [`CableError::Diverged`] is a configuration error,
/// rejected up front at construction (or at the offending `step` call for a
/// bad timestep) with no state change. `Diverged` is the one runtime
/// failure: the integrator found a non-finite position or velocity, which
/// points at a stiffness/timestep mismatch rather than bad input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CableError {
    #[error("cable needs at least 2 mass points, got {0}")]
    TooFewPoints(usize),
    #[error("target length must be positive and finite, got {0}")]
    InvalidTargetLength(f64),
    #[error("linear density must be non-negative and finite, got {0}")]
    InvalidDensity(f64),
    #[error("{name} mass must be non-negative and finite, got {value}")]
    InvalidMass { name: &'static str, value: f64 },
    #[error("initial deployed length {0} lies outside [0, target length]")]
    InvalidInitialDeployment(f64),
    #[error("link stiffness and damping must be non-negative and finite")]
    InvalidLinkParams,
    #[error("configured positions and velocities must be finite")]
    NonFiniteInput,
    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),
    #[error("simulation diverged at t = {time} s: non-finite state at point {index}")]
    Diverged { time: f64, index: usize },
}
