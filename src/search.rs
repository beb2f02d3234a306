//! Exact and radius lookups over a loaded dataset.

use serde::Serialize;
use tracing::debug;

use crate::distance::{DistanceCalculator, StdTrig};
use crate::models::Zip;

/// Radii below this skip the distance scan and return only the center.
pub const MIN_RADIUS_MILES: f64 = 0.1;

/// Distances below this are reported as exactly zero.
const ZERO_DISTANCE_MILES: f64 = 0.1;

/// A radius query hit: the record and its distance from the query center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor<'a> {
    #[serde(flatten)]
    pub zip: &'a Zip,
    /// Miles from the center record
    pub distance: f64,
}

/// Find the first record whose code matches `code` exactly.
pub fn find<'a>(code: &str, zips: &'a [Zip]) -> Option<&'a Zip> {
    zips.iter().find(|zip| zip.code == code)
}

/// Find every record within `radius` miles of the record for `code`.
///
/// Returns nothing if `code` is unknown. Results keep dataset order and
/// include the center itself at distance 0.
///
/// ```
/// use zipgeo::{find_in_radius, Zip};
///
/// let zips = vec![
///     Zip::new("28115", 35.5, -80.8),
///     Zip::new("28117", 35.6, -80.8),
///     Zip::new("00501", 40.922326, -72.637078),
/// ];
///
/// let near = find_in_radius("28115", 10.0, &zips);
/// let codes: Vec<&str> = near.iter().map(|n| n.zip.code.as_str()).collect();
/// assert_eq!(codes, ["28115", "28117"]);
/// assert_eq!(near[0].distance, 0.0);
/// assert!((near[1].distance - 6.909).abs() < 0.01);
/// ```
pub fn find_in_radius<'a>(code: &str, radius: f64, zips: &'a [Zip]) -> Vec<Neighbor<'a>> {
    let Some(center) = find(code, zips) else {
        debug!(code, "Radius query center not found");
        return Vec::new();
    };

    if radius.is_nan() || radius < MIN_RADIUS_MILES {
        return vec![Neighbor {
            zip: center,
            distance: 0.0,
        }];
    }

    let calc = DistanceCalculator::new(StdTrig);
    let found: Vec<Neighbor<'a>> = zips
        .iter()
        .filter_map(|zip| {
            let distance = calc.between_zips(center, zip);
            if distance > radius {
                return None;
            }
            let distance = if distance < ZERO_DISTANCE_MILES {
                0.0
            } else {
                distance
            };
            Some(Neighbor { zip, distance })
        })
        .collect();

    debug!(
        code,
        radius,
        scanned = zips.len(),
        found = found.len(),
        "Radius query complete"
    );

    found
}
