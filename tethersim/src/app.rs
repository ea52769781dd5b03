//! Builds the cable from CLI arguments and drives it headlessly.
//!
//! The loop reproduces the rhythm of an interactive frontend: a burst of
//! sub-steps, one telemetry read, one log line per frame.

use anyhow::{ensure, Context, Result};
use cable::{Cable, CableConfig, PointGravity, SpoolFriction, EARTH_MU, REFERENCE_ORBIT_RADIUS};
use glam::{DQuat, DVec3};

use crate::Cli;

/// Sub-steps between two telemetry reads.
const STEPS_PER_FRAME: usize = 200;

/// Mean Earth radius in m, for altitude readouts.
const EARTH_RADIUS: f64 = 6.371e6;

pub fn run(cli: &Cli) -> Result<()> {
    ensure!(
        cli.timestep.is_finite() && cli.timestep > 0.0,
        "timestep must be positive, got {}",
        cli.timestep
    );
    ensure!(
        cli.duration.is_finite() && cli.duration >= 0.0,
        "duration must be non-negative, got {}",
        cli.duration
    );

    let gravity = PointGravity::new(EARTH_MU);
    let config = CableConfig {
        anchor_position: DVec3::new(0.0, REFERENCE_ORBIT_RADIUS, 0.0),
        anchor_velocity: DVec3::new(
            gravity.circular_orbit_speed(REFERENCE_ORBIT_RADIUS),
            0.0,
            0.0,
        ),
        satellite_mass: cli.sat_mass,
        end_mass: cli.end_mass,
        target_length: cli.length,
        point_count: cli.points,
        linear_density: cli.linear_density,
        deployment_velocity: deployment_velocity(
            cli.deployment_angle[0],
            cli.deployment_angle[1],
            cli.deployment_speed,
        ),
        ..CableConfig::default()
    };
    let friction = SpoolFriction::new(cli.friction, cli.braking_force, cli.length);
    let mut cable =
        Cable::new(config, gravity, friction).context("invalid cable configuration")?;

    tracing::info!(
        points = cli.points,
        length_m = cli.length,
        timestep_s = cli.timestep,
        duration_s = cli.duration,
        "starting deployment run"
    );

    let mut remaining = (cli.duration / cli.timestep).ceil() as usize;
    while remaining > 0 {
        let burst = remaining.min(STEPS_PER_FRAME);
        cable.run(cli.timestep, burst)?;
        remaining -= burst;
        log_frame(&cable);
    }

    tracing::info!(
        deployed_m = cable.deployed_length(),
        time_s = cable.time(),
        "run complete"
    );
    Ok(())
}

/// One telemetry line per frame: the readouts an interactive frontend would
/// draw as its HUD.
fn log_frame(cable: &Cable) {
    let positions = cable.positions();
    let velocities = cable.velocities();
    let mid = positions.len() / 2;
    let max_tension = cable.tensions().iter().fold(0.0_f64, |a, &t| a.max(t));
    tracing::info!(
        time_s = cable.time(),
        deployed_m = cable.deployed_length(),
        mid_altitude_km = (positions[mid].length() - EARTH_RADIUS) * 1e-3,
        mid_speed = velocities[mid].length(),
        max_tension_n = max_tension,
        "frame"
    );
}

/// Free-end velocity relative to the anchor: straight down, tilted by the
/// two deployment angles, scaled by the deployment speed.
fn deployment_velocity(angle_x_deg: f64, angle_y_deg: f64, speed: f64) -> DVec3 {
    let in_plane = DQuat::from_axis_angle(DVec3::Z, angle_x_deg.to_radians());
    let out_of_plane = DQuat::from_axis_angle(DVec3::X, angle_y_deg.to_radians());
    out_of_plane * (in_plane * DVec3::NEG_Y) * speed
}

#[cfg(test)]
mod tests {
    use super::deployment_velocity;
    use glam::DVec3;

    #[test]
    fn zero_angles_deploy_straight_down() {
        let v = deployment_velocity(0.0, 0.0, 10.0);
        assert!((v - DVec3::new(0.0, -10.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn in_plane_angle_rotates_about_z() {
        let v = deployment_velocity(90.0, 0.0, 5.0);
        assert!((v - DVec3::new(5.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn out_of_plane_angle_leaves_the_orbital_plane() {
        let v = deployment_velocity(0.0, 90.0, 5.0);
        assert!(v.z.abs() > 4.9, "expected out-of-plane component, got {v:?}");
    }
}
