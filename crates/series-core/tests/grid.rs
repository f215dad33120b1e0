// File: crates/series-core/tests/grid.rs
// Purpose: Sample grid shape, endpoint pinning and range validation.

use proptest::prelude::*;
use series_core::{generate_grid, sample_curve, SeriesError};

#[test]
fn reference_grid_has_fifty_points_over_ten() {
    let g = generate_grid(-10.0, 10.0, 50).expect("valid grid");
    assert_eq!(g.len(), 50);
    assert_eq!(g[0], -10.0);
    assert_eq!(g[49], 10.0);
    let step = 20.0 / 49.0;
    for w in g.windows(2) {
        assert!((w[1] - w[0] - step).abs() < 1e-12);
    }
}

#[test]
fn rejects_inverted_and_degenerate_ranges() {
    assert!(matches!(generate_grid(1.0, 1.0, 10), Err(SeriesError::InvalidRange { .. })));
    assert!(matches!(generate_grid(2.0, -2.0, 10), Err(SeriesError::InvalidRange { .. })));
    assert!(matches!(generate_grid(0.0, 1.0, 0), Err(SeriesError::InvalidRange { .. })));
    assert!(matches!(generate_grid(0.0, 1.0, 1), Err(SeriesError::InvalidRange { .. })));
    assert!(matches!(generate_grid(f64::NAN, 1.0, 5), Err(SeriesError::InvalidRange { .. })));
}

#[test]
fn sample_curve_pairs_each_x_with_its_value() {
    let g = generate_grid(0.0, 3.0, 4).unwrap();
    let pts = sample_curve(|x| x * x, &g);
    assert_eq!(pts, vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]);
}

proptest! {
    #[test]
    fn grid_is_strictly_increasing_with_pinned_ends(
        low in -1.0e3f64..1.0e3,
        width in 1.0e-3f64..1.0e3,
        count in 2usize..500,
    ) {
        let high = low + width;
        let g = generate_grid(low, high, count).unwrap();
        prop_assert_eq!(g.len(), count);
        prop_assert_eq!(g[0], low);
        prop_assert_eq!(g[count - 1], high);
        for w in g.windows(2) {
            prop_assert!(w[1] > w[0]);
        }
    }
}
