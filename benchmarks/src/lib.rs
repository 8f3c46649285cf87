//! Shared helpers for marble benchmark suites.

use marble_kernel::mock::MockBuilding;
use marble_kernel::probe::Floor;

/// Building sizes used across benchmark groups.
pub const BUILDING_SIZES: [Floor; 4] = [16, 256, 4096, 65_536];

/// Threshold positions benchmarked for each building: ground floor, a
/// quarter of the way up, and the top floor.
#[must_use]
pub fn thresholds_for(number_floors: Floor) -> [(&'static str, Floor); 3] {
    [
        ("ground", 0),
        ("quarter", number_floors / 4),
        ("top", number_floors),
    ]
}

/// Build a strict building for a benchmark case.
///
/// # Panics
///
/// Panics if `threshold > number_floors`. Benchmark setup failures are fatal.
#[must_use]
pub fn building(number_floors: Floor, threshold: Floor) -> MockBuilding {
    MockBuilding::new(number_floors, threshold).expect("benchmark threshold within building")
}
