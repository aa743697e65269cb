use criterion::{criterion_group, criterion_main, Criterion};
use escapetime::{Domain, FractalGrid, Preset, Resolution};

fn cubic_default_grid(c: &mut Criterion) {
    c.bench_function("cubic 500x500, 20 steps", |b| {
        b.iter(|| {
            let mut grid = FractalGrid::new(Domain::default(), Resolution::default()).unwrap();
            grid.run(20)
        })
    });
}

fn burning_ship_preset(c: &mut Criterion) {
    c.bench_function("burning ship preset, 50 steps", |b| {
        b.iter(|| {
            let mut grid = Preset::BurningShip.build().unwrap();
            grid.run(50)
        })
    });
}

criterion_group!(benches, cubic_default_grid, burning_ship_preset);
criterion_main!(benches);
