//! Per-step passes over the mass-point chain.
//!
//! Each pass is a free function over the point slice; [`Cable::step`]
//! (in [`crate::cable`]) orchestrates them in order. `front` is the index of
//! the deepest deployed interior point, so the active set is always
//! `0..=front` plus the free end, and the link at index `front` ties the
//! chain tip to the free end with the partial rest length of the cable most
//! recently paid out.

use glam::DVec3;

use crate::forces::ForceField;
use crate::types::MassPoint;

/// Unit direction from the chain tip toward the free end, falling back to
/// the relative-velocity direction while the chain is still coincident.
pub(crate) fn local_tangent(points: &[MassPoint], front: usize) -> Option<DVec3> {
    let free = points.len() - 1;
    (points[free].position - points[front].position)
        .try_normalize()
        .or_else(|| (points[free].velocity - points[0].velocity).try_normalize())
}

/// Zero the force buffer and deposit gravity on every active point.
pub(crate) fn accumulate_gravity(
    points: &[MassPoint],
    front: usize,
    field: &dyn ForceField,
    forces: &mut [DVec3],
) {
    for force in forces.iter_mut() {
        *force = DVec3::ZERO;
    }
    for i in 0..=front {
        forces[i] = field.acceleration(points[i].position) * points[i].mass;
    }
    let free = points.len() - 1;
    forces[free] = field.acceleration(points[free].position) * points[free].mass;
}

/// Reel resistance on the free end, opposing its motion relative to the
/// anchor along the local cable tangent.
pub(crate) fn apply_spool_friction(
    points: &[MassPoint],
    front: usize,
    magnitude: f64,
    forces: &mut [DVec3],
) {
    let Some(tangent) = local_tangent(points, front) else {
        return;
    };
    let free = points.len() - 1;
    let tangential_speed = (points[free].velocity - points[0].velocity).dot(tangent);
    if tangential_speed.abs() > f64::EPSILON {
        forces[free] -= tangent * magnitude.copysign(tangential_speed);
    }
}

/// One-sided spring-damper tension for every link, depositing the paired
/// forces and recording the per-link magnitudes.
///
/// Links `0..front` are fully paid out at the nominal rest length. The link
/// at index `front` connects the chain tip to the free end with
/// `front_rest_length`, the partial payout. Links beyond the front belong
/// to still-coiled cable and stay at zero.
#[allow(clippy::too_many_arguments)]
pub(crate) fn solve_link_tensions(
    points: &[MassPoint],
    front: usize,
    segment_length: f64,
    front_rest_length: f64,
    stiffness: f64,
    damping: f64,
    tensions: &mut [f64],
    forces: &mut [DVec3],
) {
    for tension in tensions.iter_mut() {
        *tension = 0.0;
    }

    for i in 0..front {
        let (tension, direction) =
            link_tension(&points[i], &points[i + 1], segment_length, stiffness, damping);
        if tension > 0.0 {
            forces[i] += direction * tension;
            forces[i + 1] -= direction * tension;
        }
        tensions[i] = tension;
    }

    let free = points.len() - 1;
    let (tension, direction) = link_tension(
        &points[front],
        &points[free],
        front_rest_length,
        stiffness,
        damping,
    );
    if tension > 0.0 {
        forces[front] += direction * tension;
        forces[free] -= direction * tension;
    }
    tensions[front] = tension;
}

/// Tension magnitude and unit direction `a -> b` for one link. A slack link
/// carries nothing; a rope never pushes.
fn link_tension(
    a: &MassPoint,
    b: &MassPoint,
    rest_length: f64,
    stiffness: f64,
    damping: f64,
) -> (f64, DVec3) {
    let delta = b.position - a.position;
    let length = delta.length();
    if length < f64::EPSILON {
        return (0.0, DVec3::ZERO);
    }
    let direction = delta / length;
    let stretch = length - rest_length;
    if stretch <= 0.0 {
        return (0.0, direction);
    }
    let separation_speed = (b.velocity - a.velocity).dot(direction);
    let tension = (stiffness * stretch + damping * separation_speed).max(0.0);
    (tension, direction)
}

/// Semi-implicit Euler update for the active set; the fresh velocity
/// advances the position. Still-coiled points ride on the deployment front
/// afterwards.
pub(crate) fn integrate_active(
    points: &mut [MassPoint],
    front: usize,
    forces: &[DVec3],
    dt: f64,
) {
    let free = points.len() - 1;
    for i in 0..=front {
        step_point(&mut points[i], forces[i], dt);
    }
    step_point(&mut points[free], forces[free], dt);

    let deployment_front = points[free];
    for point in &mut points[front + 1..free] {
        point.position = deployment_front.position;
        point.velocity = deployment_front.velocity;
    }
}

fn step_point(point: &mut MassPoint, force: DVec3, dt: f64) {
    if point.mass > 0.0 {
        point.velocity += force / point.mass * dt;
    }
    point.position += point.velocity * dt;
}

/// Index of the first point whose state went non-finite, if any.
pub(crate) fn first_non_finite(points: &[MassPoint]) -> Option<usize> {
    points
        .iter()
        .position(|p| !p.position.is_finite() || !p.velocity.is_finite())
}
