use cable::{Cable, CableConfig, DVec3, PointGravity, SpoolFriction, REFERENCE_ORBIT_RADIUS};

// With deployment, friction, and braking all zero the coiled cable rides
// along with the satellite, so the anchor must trace the initial circular
// orbit without secular drift. This pins the symplectic integrator choice: a
// plain forward Euler update fails the radius bound within a second.
#[test]
fn anchor_holds_circular_orbit_without_deployment() {
    let gravity = PointGravity::default();
    let radius = REFERENCE_ORBIT_RADIUS;
    let speed = gravity.circular_orbit_speed(radius);
    let config = CableConfig {
        point_count: 50,
        deployment_velocity: DVec3::ZERO,
        ..CableConfig::default()
    };
    let friction = SpoolFriction::new(0.0, 0.0, config.target_length);
    let mut cable = Cable::new(config, gravity, friction).unwrap();

    cable.run(1e-4, 20_000).unwrap(); // 2 s of flight

    let final_radius = cable.satellite_position().length();
    let final_speed = cable.velocities()[0].length();
    assert!(
        (final_radius - radius).abs() < 5.0,
        "orbital radius drifted by {} m",
        (final_radius - radius).abs()
    );
    assert!(
        (final_speed - speed).abs() < 0.05,
        "orbital speed drifted by {} m/s",
        (final_speed - speed).abs()
    );

    // nothing was paid out, nothing is taut
    assert!(cable.deployed_length().abs() < f64::EPSILON);
    assert!(cable.tensions().iter().all(|&t| t.abs() < f64::EPSILON));
}
