//! Exhaustive correctness and drop-count lock tests.
//!
//! For every building up to 200 floors and every threshold in it:
//! - both strategies return the threshold,
//! - linear drops match `H + 1` (or `N` when `H == N`),
//! - adaptive drops stay within `ceil(log2(N + 1)) + 1`.

use marble_kernel::mock::MockBuilding;
use marble_kernel::probe::{DropCount, Floor, Probe};
use marble_search::adaptive::adaptive_search;
use marble_search::bounds::{adaptive_drop_bound, ceil_log2};
use marble_search::linear::linear_search;

const MAX_FLOORS: Floor = 200;

fn pairs() -> impl Iterator<Item = (Floor, Floor)> {
    (0..=MAX_FLOORS).flat_map(|n| (0..=n).map(move |h| (n, h)))
}

#[test]
fn linear_returns_threshold_everywhere() {
    for (n, h) in pairs() {
        let mut building = MockBuilding::new(n, h).unwrap();
        assert_eq!(linear_search(&mut building).unwrap(), h, "n={n} h={h}");
    }
}

#[test]
fn adaptive_returns_threshold_everywhere() {
    for (n, h) in pairs() {
        let mut building = MockBuilding::new(n, h).unwrap();
        assert_eq!(adaptive_search(&mut building).unwrap(), h, "n={n} h={h}");
    }
}

#[test]
fn linear_drop_count_closed_form() {
    for (n, h) in pairs() {
        let mut building = MockBuilding::new(n, h).unwrap();
        linear_search(&mut building).unwrap();
        let expected: DropCount = if n == 0 {
            0
        } else if h < n {
            DropCount::from(h) + 1
        } else {
            DropCount::from(n)
        };
        assert_eq!(building.drop_count(), expected, "n={n} h={h}");
    }
}

#[test]
fn adaptive_drop_count_within_log_bound() {
    for (n, h) in pairs() {
        let mut building = MockBuilding::new(n, h).unwrap();
        adaptive_search(&mut building).unwrap();
        assert!(
            building.drop_count() <= adaptive_drop_bound(n),
            "n={n} h={h}: {} drops, bound {}",
            building.drop_count(),
            adaptive_drop_bound(n)
        );
    }
}

#[test]
fn adaptive_never_exceeds_bare_log_for_multi_floor_buildings() {
    // The +1 slack in the bound is only needed for the one-floor branch.
    for (n, h) in pairs().filter(|&(n, _)| n >= 1) {
        let mut building = MockBuilding::new(n, h).unwrap();
        adaptive_search(&mut building).unwrap();
        assert!(
            building.drop_count() <= DropCount::from(ceil_log2(u64::from(n) + 1)),
            "n={n} h={h}"
        );
    }
}

#[test]
fn large_building_stays_logarithmic() {
    let n: Floor = 1_000_000;
    for h in [0, 1, 499_999, 500_000, 999_999, n] {
        let mut building = MockBuilding::new(n, h).unwrap();
        assert_eq!(adaptive_search(&mut building).unwrap(), h);
        assert!(building.drop_count() <= 21, "h={h}: {}", building.drop_count());
    }
}
