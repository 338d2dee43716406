use mazestar_core::Location;

/// Straight-line (L2) distance between two locations.
#[inline]
pub fn euclidean(a: Location, b: Location) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dz = f64::from(a.z) - f64::from(b.z);
    dx.hypot(dz)
}

/// Manhattan (L1) distance between two locations, saturating at
/// `i32::MAX`.
#[inline]
pub fn manhattan(a: Location, b: Location) -> i32 {
    let d = a.x.abs_diff(b.x).saturating_add(a.z.abs_diff(b.z));
    i32::try_from(d).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_steps_cost_one() {
        let a = Location::new(3, 3);
        assert_eq!(euclidean(a, a.shift(1, 0)), 1.0);
        assert_eq!(euclidean(a, a.shift(0, -1)), 1.0);
        assert_eq!(euclidean(Location::ZERO, Location::new(3, 4)), 5.0);
        assert_eq!(manhattan(Location::ZERO, Location::new(3, -4)), 7);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let lo = Location::new(i32::MIN, i32::MIN);
        let hi = Location::new(i32::MAX, i32::MAX);
        let d = euclidean(lo, hi);
        assert!(d.is_finite());
        assert!(d > f64::from(i32::MAX));
        assert_eq!(manhattan(lo, hi), i32::MAX);
        assert_eq!(manhattan(Location::new(i32::MIN, 0), Location::ZERO), i32::MAX);
    }
}
