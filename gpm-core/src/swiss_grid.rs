//! Approximate WGS84 → Swiss grid (CH1903) projection.
//!
//! Uses the published swisstopo polynomial approximation. The result feeds
//! map.geo.admin.ch deep links, so coefficients and rounding must not drift.

use serde::{Deserialize, Serialize};

/// Easting/northing in meters on the Swiss grid.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct SwissGrid {
    #[serde(rename = "E")]
    pub e: i64,
    #[serde(rename = "N")]
    pub n: i64,
}

/// Project decimal-degree WGS84 coordinates to the Swiss grid.
///
/// Defined for every real input; points outside Switzerland give a
/// meaningless but well-defined pair.
pub fn wgs84_to_swiss_grid(lat: f64, lng: f64) -> SwissGrid {
    let phi = lat * 3600.0;
    let lambda = lng * 3600.0;

    let phi_aux = (phi - 169028.66) / 10000.0;
    let lambda_aux = (lambda - 26782.5) / 10000.0;

    let e = 2600072.37 + 211455.93 * lambda_aux
        - 10938.51 * lambda_aux * phi_aux
        - 0.36 * lambda_aux * phi_aux * phi_aux
        - 44.54 * lambda_aux * lambda_aux * lambda_aux;

    let n = 1200147.07
        + 308807.95 * phi_aux
        + 3745.25 * lambda_aux * lambda_aux
        + 76.63 * phi_aux * phi_aux
        - 194.56 * lambda_aux * lambda_aux * phi_aux
        + 119.79 * phi_aux * phi_aux * phi_aux;

    SwissGrid {
        e: round_half_up(e),
        n: round_half_up(n),
    }
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graubunden_reference_point() {
        let grid = wgs84_to_swiss_grid(46.6, 9.8);
        assert_eq!(grid, SwissGrid { e: 2780909, n: 1163693 });
    }

    #[test]
    fn test_chur() {
        let grid = wgs84_to_swiss_grid(46.8499, 9.5331);
        assert_eq!(grid, SwissGrid { e: 2759725, n: 1190883 });
    }

    #[test]
    fn test_bern_near_grid_origin() {
        let grid = wgs84_to_swiss_grid(46.95108, 7.43864);
        assert_eq!(grid, SwissGrid { e: 2600001, n: 1200000 });
    }

    #[test]
    fn test_outside_switzerland_is_well_defined() {
        let grid = wgs84_to_swiss_grid(0.0, 0.0);
        assert_eq!(grid, SwissGrid { e: 1539684, n: -4525742 });
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.4999), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
    }

    #[test]
    fn test_serializes_as_e_n() {
        let json = serde_json::to_string(&SwissGrid { e: 1, n: 2 }).unwrap();
        assert_eq!(json, r#"{"E":1,"N":2}"#);
    }
}
