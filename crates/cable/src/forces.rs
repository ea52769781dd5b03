//! External force capabilities consumed by the cable.
//!
//! Both seams are narrow strategy traits injected at construction: a
//! [`ForceField`] sampled once per mass point per step, and a
//! [`FrictionModel`] sampled once per step for the deployment reel. Plain
//! closures implement both, so callers can pass a lambda where a named
//! implementation would be overkill.

use glam::DVec3;

/// Gravitational parameter of Earth, m^3/s^2.
pub const EARTH_MU: f64 = 3.986e14;

/// External acceleration field, sampled once per mass point per step.
///
/// Implementations must be pure and finite for every non-zero position. The
/// origin is never sampled because the anchor orbits at non-zero radius.
pub trait ForceField {
    fn acceleration(&self, position: DVec3) -> DVec3;
}

impl<F> ForceField for F
where
    F: Fn(DVec3) -> DVec3,
{
    fn acceleration(&self, position: DVec3) -> DVec3 {
        self(position)
    }
}

/// Resistance of the deployment reel as a function of paid-out length.
pub trait FrictionModel {
    /// Opposing-force magnitude in N, never negative. Applied to the free
    /// end only, against its motion along the local cable tangent.
    fn opposing_force(&self, deployed_length: f64) -> f64;
}

impl<F> FrictionModel for F
where
    F: Fn(f64) -> f64,
{
    fn opposing_force(&self, deployed_length: f64) -> f64 {
        self(deployed_length)
    }
}

/// Newtonian point-mass gravity toward the coordinate origin.
#[derive(Clone, Copy, Debug)]
pub struct PointGravity {
    mu: f64,
}

impl PointGravity {
    #[must_use]
    pub const fn new(mu: f64) -> Self {
        Self { mu }
    }

    /// Speed of a circular orbit at `radius`.
    #[must_use]
    pub fn circular_orbit_speed(&self, radius: f64) -> f64 {
        (self.mu / radius).sqrt()
    }
}

impl Default for PointGravity {
    fn default() -> Self {
        Self::new(EARTH_MU)
    }
}

impl ForceField for PointGravity {
    fn acceleration(&self, position: DVec3) -> DVec3 {
        let r_squared = position.length_squared();
        -position.normalize() * (self.mu / r_squared)
    }
}

/// Constant reel friction plus a brake that engages at the target length.
#[derive(Clone, Copy, Debug)]
pub struct SpoolFriction {
    friction: f64,
    braking: f64,
    target_length: f64,
}

impl SpoolFriction {
    #[must_use]
    pub const fn new(friction: f64, braking: f64, target_length: f64) -> Self {
        Self {
            friction,
            braking,
            target_length,
        }
    }
}

impl FrictionModel for SpoolFriction {
    fn opposing_force(&self, deployed_length: f64) -> f64 {
        if deployed_length < self.target_length {
            self.friction
        } else {
            self.friction + self.braking
        }
    }
}
