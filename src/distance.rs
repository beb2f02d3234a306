//! Great-circle distance in statute miles.
//!
//! Uses the spherical law of cosines. Records carry the sine and cosine of
//! their latitude so record-to-record distances only need one `cos` and one
//! `acos` per pair.

use crate::models::Zip;

/// Statute miles per degree of arc (60 nautical miles * 1.1515).
pub const MILES_PER_DEGREE: f64 = 60.0 * 1.1515;

/// Sine/cosine source for the distance calculation.
pub trait Trig {
    fn sin(&self, radians: f64) -> f64;
    fn cos(&self, radians: f64) -> f64;
}

/// `f64::sin` / `f64::cos`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTrig;

impl Trig for StdTrig {
    fn sin(&self, radians: f64) -> f64 {
        radians.sin()
    }

    fn cos(&self, radians: f64) -> f64 {
        radians.cos()
    }
}

/// Precomputed sine and cosine of a latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatitudeTrig {
    pub sin: f64,
    pub cos: f64,
}

impl LatitudeTrig {
    pub fn from_degrees(latitude: f64) -> Self {
        Self::with(&StdTrig, latitude)
    }

    pub fn with<T: Trig>(trig: &T, latitude: f64) -> Self {
        let radians = latitude.to_radians();
        Self {
            sin: trig.sin(radians),
            cos: trig.cos(radians),
        }
    }
}

/// Distance calculator parameterised over its trig functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceCalculator<T: Trig = StdTrig> {
    trig: T,
}

impl<T: Trig> DistanceCalculator<T> {
    pub fn new(trig: T) -> Self {
        Self { trig }
    }

    /// Distance in miles between two raw coordinate pairs.
    pub fn between(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        let a = LatitudeTrig::with(&self.trig, lat1);
        let b = LatitudeTrig::with(&self.trig, lat2);
        self.miles(a, lon1, b, lon2)
    }

    /// Distance in miles between two records, reusing their cached latitude
    /// trig. Records with the same code are 0 miles apart.
    pub fn between_zips(&self, a: &Zip, b: &Zip) -> f64 {
        if a.code == b.code {
            return 0.0;
        }
        self.miles(a.trig(), a.longitude(), b.trig(), b.longitude())
    }

    /// Miles between two points given their latitude trig and longitudes.
    pub fn miles(&self, a: LatitudeTrig, lon1: f64, b: LatitudeTrig, lon2: f64) -> f64 {
        let theta = (lon1 - lon2).to_radians();
        let cos_central = a.sin * b.sin + a.cos * b.cos * self.trig.cos(theta);
        // Rounding can push identical points just past 1.0
        let central = cos_central.clamp(-1.0, 1.0).acos();
        central.to_degrees() * MILES_PER_DEGREE
    }
}

/// Distance in miles between `(lat1, lon1)` and `(lat2, lon2)`, in decimal degrees.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    DistanceCalculator::<StdTrig>::default().between(lat1, lon1, lat2, lon2)
}

/// Distance in miles between two records.
pub fn zip_distance(a: &Zip, b: &Zip) -> f64 {
    DistanceCalculator::<StdTrig>::default().between_zips(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const DELTA: f64 = 0.01;

    #[test]
    fn test_distance_to_self_is_zero() {
        assert!(distance(0.0, 0.0, 0.0, 0.0).abs() < DELTA);
        assert!(distance(40.922326, -72.637078, 40.922326, -72.637078).abs() < DELTA);
        assert!(distance(-33.8688, 151.2093, -33.8688, 151.2093).abs() < DELTA);
    }

    #[test]
    fn test_identical_points_never_nan() {
        for &(lat, lon) in &[
            (40.922326, -72.637078),
            (35.688136, -80.819825),
            (89.999999, 179.999999),
            (-0.000001, 0.000001),
            (12.3456789, -98.7654321),
        ] {
            let d = distance(lat, lon, lat, lon);
            assert!(!d.is_nan(), "distance({lat}, {lon}) to itself was NaN");
        }
    }

    #[test]
    fn test_known_distance() {
        let d = distance(40.922326, -72.637078, 35.688136, -80.819825);
        assert!((d - 571.90).abs() < DELTA, "got {}", d);
    }

    #[test]
    fn test_symmetry() {
        let points = [
            (40.922326, -72.637078),
            (35.688136, -80.819825),
            (47.6062, -122.3321),
            (25.7617, -80.1918),
        ];
        for &(lat1, lon1) in &points {
            for &(lat2, lon2) in &points {
                let ab = distance(lat1, lon1, lat2, lon2);
                let ba = distance(lat2, lon2, lat1, lon1);
                assert!((ab - ba).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = distance(35.0, -80.0, 36.0, -80.0);
        assert!((d - MILES_PER_DEGREE).abs() < 1e-6);
    }

    #[test]
    fn test_zip_distance_matches_raw() {
        let a = Zip::new("00501", 40.922326, -72.637078);
        let b = Zip::new("28115", 35.688136, -80.819825);
        let raw = distance(40.922326, -72.637078, 35.688136, -80.819825);
        assert!((zip_distance(&a, &b) - raw).abs() < 1e-9);
    }

    #[test]
    fn test_zip_distance_same_code_short_circuits() {
        let a = Zip::new("28115", 35.0, -80.0);
        let b = Zip::new("28115", 36.0, -81.0);
        assert_eq!(zip_distance(&a, &b), 0.0);
    }

    struct CountingTrig {
        calls: Cell<usize>,
    }

    impl Trig for CountingTrig {
        fn sin(&self, radians: f64) -> f64 {
            self.calls.set(self.calls.get() + 1);
            radians.sin()
        }

        fn cos(&self, radians: f64) -> f64 {
            self.calls.set(self.calls.get() + 1);
            radians.cos()
        }
    }

    #[test]
    fn test_zip_distance_reuses_cached_trig() {
        let calc = DistanceCalculator::new(CountingTrig {
            calls: Cell::new(0),
        });
        let a = Zip::new("00501", 40.922326, -72.637078);
        let b = Zip::new("28115", 35.688136, -80.819825);

        calc.between_zips(&a, &b);
        // Only cos(delta longitude); latitude trig comes from the records
        assert_eq!(calc.trig.calls.get(), 1);

        calc.between(40.922326, -72.637078, 35.688136, -80.819825);
        assert_eq!(calc.trig.calls.get(), 1 + 5);
    }

    struct OvershootTrig;

    impl Trig for OvershootTrig {
        fn sin(&self, radians: f64) -> f64 {
            radians.sin()
        }

        fn cos(&self, radians: f64) -> f64 {
            // Push the central angle cosine slightly above 1.0
            radians.cos() + 1e-12
        }
    }

    #[test]
    fn test_acos_argument_is_clamped() {
        let calc = DistanceCalculator::new(OvershootTrig);
        let d = calc.between(0.0, 0.0, 0.0, 0.0);
        assert_eq!(d, 0.0);
    }
}
