use criterion::{criterion_group, criterion_main, Criterion};

use cable::{Cable, CableConfig, PointGravity, SpoolFriction};

// Hot-loop cost of one sub-step at the reference resolution; frontends run
// hundreds of these per rendered frame.
fn bench_step(c: &mut Criterion) {
    let config = CableConfig::default();
    let friction = SpoolFriction::new(0.0, 1.0, config.target_length);
    let mut cable = Cable::new(config, PointGravity::default(), friction).unwrap();

    c.bench_function("step_1000_points", |b| {
        b.iter(|| cable.step(1e-4).unwrap());
    });
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
