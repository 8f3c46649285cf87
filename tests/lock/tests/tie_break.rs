//! Tie-break lock tests: the midpoint always rounds down.
//!
//! Exact probe sequences are pinned so a change to the rounding rule (which
//! would shift drop counts for specific buildings) is caught here.

use marble_kernel::mock::MockBuilding;
use marble_kernel::probe::Floor;
use marble_kernel::recording::RecordingProbe;
use marble_search::adaptive::adaptive_search;

fn sequence(number_floors: Floor, threshold: Floor) -> Vec<Floor> {
    let mut probe = RecordingProbe::new(MockBuilding::new(number_floors, threshold).unwrap());
    adaptive_search(&mut probe).unwrap();
    probe.floors()
}

#[test]
fn four_floors_threshold_three() {
    assert_eq!(sequence(4, 3), vec![2, 3, 4]);
}

#[test]
fn hundred_floors_threshold_seventy_three() {
    assert_eq!(sequence(100, 73), vec![50, 75, 62, 68, 71, 73, 74]);
}

#[test]
fn two_floors_probe_lower_middle_first() {
    // Bracket (0, 3): interior floors 1 and 2, rounding down picks 1.
    assert_eq!(sequence(2, 2), vec![1, 2]);
    assert_eq!(sequence(2, 0), vec![1]);
}

#[test]
fn every_probe_lands_inside_the_building() {
    for n in 1..=128 {
        for h in 0..=n {
            let floors = sequence(n, h);
            assert!(
                floors.iter().all(|&f| (1..=n).contains(&f)),
                "n={n} h={h}: {floors:?}"
            );
        }
    }
}
