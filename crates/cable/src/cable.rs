//! The simulated tether: an ordered mass-point chain from the orbiting
//! anchor to the deploying end mass, plus the deployment-length state
//! machine that pays the chain out.

use glam::DVec3;

use crate::error::CableError;
use crate::forces::{ForceField, FrictionModel};
use crate::integrator::{
    accumulate_gravity, apply_spool_friction, first_non_finite, integrate_active, local_tangent,
    solve_link_tensions,
};
use crate::types::{CableConfig, MassPoint};

/// A deployable cable between an orbiting satellite and a free end mass.
///
/// The chain is allocated once at construction: `point_count` mass points,
/// index 0 the anchor (satellite), the last index the free end that carries
/// the still-coiled cable away with it. Deployment is tracked by a single
/// length cursor; points whose station along the cable lies beyond the
/// paid-out length ride with the free end until the cable reaches them.
///
/// The only mutating operation is [`Cable::step`]. Everything else is a
/// read-only telemetry accessor, safe to call any number of times between
/// steps.
pub struct Cable {
    points: Vec<MassPoint>,
    tensions: Vec<f64>,
    forces: Vec<DVec3>,
    segment_length: f64,
    target_length: f64,
    deployed_length: f64,
    time: f64,
    stiffness: f64,
    damping: f64,
    gravity: Box<dyn ForceField>,
    friction: Box<dyn FrictionModel>,
}

impl Cable {
    /// Build a cable from `config`, injecting the gravity and reel-friction
    /// capabilities.
    ///
    /// Active points start along the deployment direction from the anchor,
    /// spaced to respect `initial_deployed_length`; the rest start coiled on
    /// the free end. Only the free end carries the deployment velocity.
    ///
    /// # Errors
    ///
    /// Rejects invalid configuration per [`CableError`]: fewer than two
    /// points, non-positive target length, negative density or masses, an
    /// initial deployed length outside the target, bad link parameters, or
    /// non-finite vectors.
    pub fn new<G, F>(config: CableConfig, gravity: G, friction: F) -> Result<Self, CableError>
    where
        G: ForceField + 'static,
        F: FrictionModel + 'static,
    {
        validate(&config)?;

        let point_count = config.point_count;
        let segment_count = point_count - 1;
        #[allow(clippy::cast_precision_loss)]
        let segment_length = config.target_length / segment_count as f64;
        let interior_mass = segment_length * config.linear_density;

        let deployed = config.initial_deployed_length;
        let direction = config
            .deployment_velocity
            .try_normalize()
            .or_else(|| (-config.anchor_position).try_normalize())
            .unwrap_or(DVec3::ZERO);

        let free_end = MassPoint {
            position: config.anchor_position + direction * deployed,
            velocity: config.anchor_velocity + config.deployment_velocity,
            mass: config.end_mass,
        };

        let mut points = Vec::with_capacity(point_count);
        points.push(MassPoint {
            position: config.anchor_position,
            velocity: config.anchor_velocity,
            mass: config.satellite_mass,
        });
        for i in 1..segment_count {
            #[allow(clippy::cast_precision_loss)]
            let station = i as f64 * segment_length;
            if station <= deployed {
                points.push(MassPoint {
                    position: config.anchor_position + direction * station,
                    velocity: config.anchor_velocity,
                    mass: interior_mass,
                });
            } else {
                points.push(MassPoint {
                    position: free_end.position,
                    velocity: free_end.velocity,
                    mass: interior_mass,
                });
            }
        }
        points.push(free_end);

        tracing::debug!(
            points = point_count,
            segment_length,
            deployed,
            "cable constructed"
        );

        Ok(Self {
            points,
            tensions: vec![0.0; segment_count],
            forces: vec![DVec3::ZERO; point_count],
            segment_length,
            target_length: config.target_length,
            deployed_length: deployed,
            time: 0.0,
            stiffness: config.link_stiffness,
            damping: config.link_damping,
            gravity: Box::new(gravity),
            friction: Box::new(friction),
        })
    }

    /// Advance the whole cable state by exactly `dt` seconds.
    ///
    /// Pays out cable at the free end's recession rate, accumulates gravity
    /// and reel friction, solves the one-sided link tensions, and applies a
    /// semi-implicit Euler update to every active point.
    ///
    /// # Errors
    ///
    /// [`CableError::InvalidTimestep`] for `dt <= 0` (no state change), or
    /// [`CableError::Diverged`] when the update produced a non-finite
    /// position or velocity.
    pub fn step(&mut self, dt: f64) -> Result<(), CableError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(CableError::InvalidTimestep(dt));
        }

        // Payout first: it fixes the active set every pass below works on.
        self.advance_deployment(dt);
        let front = self.front_index();

        accumulate_gravity(&self.points, front, self.gravity.as_ref(), &mut self.forces);

        let opposing = self.friction.opposing_force(self.deployed_length).max(0.0);
        if opposing > 0.0 {
            apply_spool_friction(&self.points, front, opposing, &mut self.forces);
        }

        #[allow(clippy::cast_precision_loss)]
        let front_rest_length =
            (self.deployed_length - front as f64 * self.segment_length).max(0.0);
        solve_link_tensions(
            &self.points,
            front,
            self.segment_length,
            front_rest_length,
            self.stiffness,
            self.damping,
            &mut self.tensions,
            &mut self.forces,
        );

        integrate_active(&mut self.points, front, &self.forces, dt);

        if let Some(index) = first_non_finite(&self.points) {
            tracing::error!(index, time = self.time, "non-finite state, step aborted");
            return Err(CableError::Diverged {
                time: self.time,
                index,
            });
        }

        self.time += dt;
        Ok(())
    }

    /// Run `steps` consecutive updates of `dt` each, the usual burst between
    /// two telemetry reads.
    ///
    /// # Errors
    ///
    /// Stops at the first failing step, see [`Cable::step`].
    pub fn run(&mut self, dt: f64, steps: usize) -> Result<(), CableError> {
        for _ in 0..steps {
            self.step(dt)?;
        }
        Ok(())
    }

    /// Grow the deployed length by the free end's recession rate, clamped to
    /// the target. The rate never goes negative, so the length is monotone.
    fn advance_deployment(&mut self, dt: f64) {
        if self.deployed_length >= self.target_length {
            return;
        }
        let Some(tangent) = local_tangent(&self.points, self.front_index()) else {
            return;
        };
        let free = self.points.len() - 1;
        let rate = (self.points[free].velocity - self.points[0].velocity)
            .dot(tangent)
            .max(0.0);
        let next = (self.deployed_length + rate * dt).min(self.target_length);
        if next >= self.target_length {
            tracing::debug!(time = self.time, "deployment complete, brake engaged");
        }
        self.deployed_length = next;
    }

    /// Index of the deepest deployed interior point: the chain tip adjacent
    /// to the deployment front.
    fn front_index(&self) -> usize {
        if self.deployed_length >= self.target_length {
            return self.points.len() - 2;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let station = (self.deployed_length / self.segment_length).floor() as usize;
        station.min(self.points.len() - 2)
    }
}

/// Read-only telemetry, polled by frontends between step bursts.
impl Cable {
    /// Point positions in chain order, index 0 the anchor.
    #[must_use]
    pub fn positions(&self) -> Vec<DVec3> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Point velocities in chain order, index 0 the anchor.
    #[must_use]
    pub fn velocities(&self) -> Vec<DVec3> {
        self.points.iter().map(|p| p.velocity).collect()
    }

    /// Per-link tension magnitudes from the last step, `point_count - 1`
    /// values, each >= 0.
    #[must_use]
    pub fn tensions(&self) -> &[f64] {
        &self.tensions
    }

    /// The chain itself, for callers that want mass alongside state.
    #[must_use]
    pub fn points(&self) -> &[MassPoint] {
        &self.points
    }

    #[must_use]
    pub fn satellite_position(&self) -> DVec3 {
        self.points[0].position
    }

    /// Cable paid out so far, m. Non-decreasing, never above the target.
    #[must_use]
    pub fn deployed_length(&self) -> f64 {
        self.deployed_length
    }

    #[must_use]
    pub fn target_length(&self) -> f64 {
        self.target_length
    }

    /// Accumulated simulated time, s.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Rest length of one fully paid-out link, m.
    #[must_use]
    pub fn nominal_segment_length(&self) -> f64 {
        self.segment_length
    }
}

fn validate(config: &CableConfig) -> Result<(), CableError> {
    if config.point_count < 2 {
        return Err(CableError::TooFewPoints(config.point_count));
    }
    if !config.target_length.is_finite() || config.target_length <= 0.0 {
        return Err(CableError::InvalidTargetLength(config.target_length));
    }
    if !config.linear_density.is_finite() || config.linear_density < 0.0 {
        return Err(CableError::InvalidDensity(config.linear_density));
    }
    if !config.satellite_mass.is_finite() || config.satellite_mass < 0.0 {
        return Err(CableError::InvalidMass {
            name: "satellite",
            value: config.satellite_mass,
        });
    }
    if !config.end_mass.is_finite() || config.end_mass < 0.0 {
        return Err(CableError::InvalidMass {
            name: "end",
            value: config.end_mass,
        });
    }
    if !config.initial_deployed_length.is_finite()
        || config.initial_deployed_length < 0.0
        || config.initial_deployed_length > config.target_length
    {
        return Err(CableError::InvalidInitialDeployment(
            config.initial_deployed_length,
        ));
    }
    if !config.link_stiffness.is_finite()
        || config.link_stiffness < 0.0
        || !config.link_damping.is_finite()
        || config.link_damping < 0.0
    {
        return Err(CableError::InvalidLinkParams);
    }
    if !config.anchor_position.is_finite()
        || !config.anchor_velocity.is_finite()
        || !config.deployment_velocity.is_finite()
    {
        return Err(CableError::NonFiniteInput);
    }
    Ok(())
}
