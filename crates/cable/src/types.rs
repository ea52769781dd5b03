use glam::DVec3;

use crate::forces::EARTH_MU;

/// Orbit radius of the reference scenario in m, roughly 400 km altitude.
pub const REFERENCE_ORBIT_RADIUS: f64 = 6.771e6;

/// One lumped mass along the cable.
#[derive(Clone, Copy, Debug)]
pub struct MassPoint {
    pub position: DVec3,
    pub velocity: DVec3,
    /// Constant after construction. Endpoints carry the satellite and end
    /// masses, interior points carry one segment's worth of cable.
    pub mass: f64,
}

/// Everything needed to build a [`Cable`](crate::Cable).
///
/// `Default` reproduces the reference deployment case: a 100 m tether of
/// 1 g/m cable paid out at 10 m/s straight down from a 1.3 kg satellite in
/// low circular orbit.
#[derive(Clone, Copy, Debug)]
pub struct CableConfig {
    /// Anchor (satellite) position at t = 0.
    pub anchor_position: DVec3,
    /// Anchor velocity at t = 0; a circular orbit when |v| = sqrt(mu / r).
    pub anchor_velocity: DVec3,
    pub satellite_mass: f64,
    pub end_mass: f64,
    /// Final cable length toward which deployment progresses, m.
    pub target_length: f64,
    /// Number of mass points, anchor and free end included. At least 2.
    pub point_count: usize,
    /// Cable mass per meter, kg/m.
    pub linear_density: f64,
    /// Free-end velocity relative to the anchor at t = 0.
    pub deployment_velocity: DVec3,
    /// Cable already paid out at t = 0, within [0, target_length].
    pub initial_deployed_length: f64,
    /// Spring constant of one link, N/m. Must keep sqrt(k/m)·dt below 2 for
    /// the interior point mass m and the timestep in use.
    pub link_stiffness: f64,
    /// Damping of one link, N·s/m.
    pub link_damping: f64,
}

impl Default for CableConfig {
    fn default() -> Self {
        let orbital_speed = (EARTH_MU / REFERENCE_ORBIT_RADIUS).sqrt();
        Self {
            anchor_position: DVec3::new(0.0, REFERENCE_ORBIT_RADIUS, 0.0),
            anchor_velocity: DVec3::new(orbital_speed, 0.0, 0.0),
            satellite_mass: 1.30,
            end_mass: 0.05,
            target_length: 100.0,
            point_count: 1000,
            linear_density: 1e-3,
            deployment_velocity: DVec3::new(0.0, -10.0, 0.0),
            initial_deployed_length: 0.0,
            link_stiffness: 5e3,
            link_damping: 0.2,
        }
    }
}
