use cable::{Cable, CableConfig, DVec3, PointGravity, SpoolFriction};

fn deploying_cable(target_length: f64, point_count: usize, braking: f64) -> Cable {
    let config = CableConfig {
        point_count,
        target_length,
        deployment_velocity: DVec3::new(0.0, -10.0, 0.0),
        link_stiffness: 50.0,
        link_damping: 0.2,
        ..CableConfig::default()
    };
    Cable::new(
        config,
        PointGravity::default(),
        SpoolFriction::new(0.02, braking, target_length),
    )
    .unwrap()
}

// A rope can pull, never push: every link, every step, through deployment
// and into the braked phase.
#[test]
fn tensions_stay_non_negative_through_deployment_and_braking() {
    let mut cable = deploying_cable(40.0, 41, 1.0);
    for _ in 0..8_000 {
        cable.step(1e-3).unwrap();
        for (i, &tension) in cable.tensions().iter().enumerate() {
            assert!(tension >= 0.0, "link {i} pushed with tension {tension}");
        }
    }
}

// During payout the paid-out links may ring as each coiled point is picked
// up, but their stretch stays within the bound set by the chosen stiffness
// and timestep.
#[test]
fn active_links_never_stretch_beyond_tolerance() {
    let mut cable = deploying_cable(100.0, 101, 0.0);
    let nominal = cable.nominal_segment_length();
    for _ in 0..30 {
        cable.run(1e-3, 100).unwrap();
        let positions = cable.positions();
        let deployed = cable.deployed_length();
        for (i, pair) in positions.windows(2).enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let fully_paid_out = (i + 1) as f64 * nominal <= deployed;
            if fully_paid_out {
                let length = (pair[1] - pair[0]).length();
                assert!(
                    length <= nominal * 1.15,
                    "link {i} stretched to {length} m (nominal {nominal} m)"
                );
            }
        }
    }
}

// A cable that never pays out stays coiled on the free end and slack.
#[test]
fn slack_coiled_cable_carries_no_tension() {
    let config = CableConfig {
        point_count: 30,
        deployment_velocity: DVec3::ZERO,
        ..CableConfig::default()
    };
    let mut cable = Cable::new(
        config,
        PointGravity::default(),
        SpoolFriction::new(0.0, 1.0, config.target_length),
    )
    .unwrap();

    cable.run(1e-4, 1_000).unwrap();
    assert!(cable.tensions().iter().all(|&t| t.abs() < f64::EPSILON));
}
