use escapetime::{Domain, Formula, FractalGrid, Resolution};
use num::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng) -> FractalGrid<Formula> {
    let x0 = rng.gen_range(-3.0, 1.0);
    let y0 = rng.gen_range(-3.0, 1.0);
    let domain = Domain::new(
        (x0, x0 + rng.gen_range(0.1, 3.0)),
        (y0, y0 + rng.gen_range(0.1, 3.0)),
    );
    let resolution = Resolution(rng.gen_range(2, 40), rng.gen_range(2, 40));
    let formula = match rng.gen_range(0, 3) {
        0 => Formula::Cubic,
        1 => Formula::Quadratic,
        _ => Formula::BurningShip,
    };
    FractalGrid::with_recurrence(domain, resolution, formula).unwrap()
}

#[test]
fn corners_land_on_the_domain_corners() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let grid = random_grid(&mut rng);
        let domain = grid.domain();
        let (w, h) = (grid.width(), grid.height());
        assert_eq!(grid.point(0, 0), Some(domain.leftlower()));
        assert_eq!(grid.point(h - 1, w - 1), Some(domain.rightupper()));
        assert_eq!(grid.grid().len(), w * h);
    }
}

#[test]
fn no_iterations_means_nothing_has_moved() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let grid = random_grid(&mut rng);
        assert_eq!(grid.escaped_count(), 0);
        assert!(grid.iterates().iter().all(|z| *z == Complex::new(0.0, 0.0)));
    }
}

#[test]
fn escaped_set_only_grows_and_escaped_pixels_freeze() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..20 {
        let mut grid = random_grid(&mut rng);
        for _ in 0..25 {
            let mask = grid.escaped_mask().to_vec();
            let iterates = grid.iterates().to_vec();
            grid.iterate();
            for (i, &was_escaped) in mask.iter().enumerate() {
                if was_escaped {
                    assert!(grid.escaped_mask()[i]);
                    let (before, after) = (iterates[i], grid.iterates()[i]);
                    assert_eq!(before.re.to_bits(), after.re.to_bits());
                    assert_eq!(before.im.to_bits(), after.im.to_bits());
                }
            }
        }
    }
}

#[test]
fn identical_grids_stay_identical() {
    let mut a_rng = StdRng::seed_from_u64(3);
    let mut b_rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        let mut a = random_grid(&mut a_rng);
        let mut b = random_grid(&mut b_rng);
        a.run(15);
        b.run(15);
        assert_eq!(a.escaped_mask(), b.escaped_mask());
        let bits = |g: &FractalGrid<Formula>| {
            g.iterates()
                .iter()
                .map(|z| (z.re.to_bits(), z.im.to_bits()))
                .collect::<Vec<_>>()
        };
        assert_eq!(bits(&a), bits(&b));
    }
}
