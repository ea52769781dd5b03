use cable::{Cable, CableConfig, DVec3, PointGravity, SpoolFriction};

// Regression testing leans on reproducibility: the same configuration and
// step sequence must yield bit-identical telemetry.
#[test]
fn identical_runs_produce_identical_telemetry() {
    let build = || {
        let config = CableConfig {
            point_count: 31,
            target_length: 30.0,
            deployment_velocity: DVec3::new(0.0, -10.0, 0.0),
            link_stiffness: 50.0,
            link_damping: 0.2,
            ..CableConfig::default()
        };
        Cable::new(
            config,
            PointGravity::default(),
            SpoolFriction::new(0.01, 0.5, config.target_length),
        )
        .unwrap()
    };

    let mut first = build();
    let mut second = build();
    first.run(1e-3, 2_000).unwrap();
    second.run(1e-3, 2_000).unwrap();

    assert_eq!(first.positions(), second.positions());
    assert_eq!(first.velocities(), second.velocities());
    assert_eq!(first.tensions(), second.tensions());
    assert!((first.deployed_length() - second.deployed_length()).abs() < f64::EPSILON);
    assert!((first.time() - second.time()).abs() < f64::EPSILON);
}
