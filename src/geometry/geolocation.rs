use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use super::units::LengthUnit;
use crate::error::GeoError;

/// Mean Earth radius in meters (spherical approximation)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// An immutable, range-checked latitude/longitude pair in decimal degrees
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180];
/// the only way to obtain a value is through [`Geolocation::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geolocation {
    latitude: Decimal,
    longitude: Decimal,
}

impl Geolocation {
    /// Unit used by [`Geolocation::great_circle_distance`]
    pub const DEFAULT_UNIT: LengthUnit = LengthUnit::Meters;

    /// Create a location, rejecting out-of-range coordinates
    ///
    /// # Arguments
    /// * `latitude` - Degrees, -90 (south pole) to 90 (north pole) inclusive
    /// * `longitude` - Degrees, -180 to 180 inclusive
    pub fn new(latitude: Decimal, longitude: Decimal) -> Result<Self, GeoError> {
        let lat_ok = latitude >= Decimal::from(-90) && latitude <= Decimal::from(90);
        let lon_ok = longitude >= Decimal::from(-180) && longitude <= Decimal::from(180);

        if !(lat_ok && lon_ok) {
            return Err(GeoError::OutOfRange {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> Decimal {
        self.latitude
    }

    pub fn longitude(&self) -> Decimal {
        self.longitude
    }

    /// Render both axes as degrees/minutes/seconds, latitude first
    ///
    /// Each axis is `{deg:>3}° {min:>2}' {sec:>2}" {letter} `. The hemisphere
    /// letter follows the sign of the rounded seconds term, so a coordinate
    /// whose seconds round to zero reports `S`/`W`.
    pub fn to_dms(&self) -> String {
        let lat = Dms::from_degrees(self.latitude).render('N', 'S');
        let lon = Dms::from_degrees(self.longitude).render('E', 'W');
        lat + &lon
    }

    /// Great-circle distance to `other` in meters
    pub fn great_circle_distance(&self, other: &Geolocation) -> Decimal {
        self.great_circle_distance_in(other, Self::DEFAULT_UNIT)
    }

    /// Great-circle distance to `other` in the requested unit
    pub fn great_circle_distance_in(&self, other: &Geolocation, unit: LengthUnit) -> Decimal {
        let meters = haversine_meters(
            to_f64(self.latitude),
            to_f64(self.longitude),
            to_f64(other.latitude),
            to_f64(other.longitude),
        );
        let distance = unit.convert_meters(meters);
        tracing::trace!(%unit, meters, distance, "great-circle distance");

        Decimal::from_f64(distance).unwrap_or(Decimal::ZERO)
    }
}

impl fmt::Display for Geolocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dms())
    }
}

/// Sexagesimal components of one coordinate axis, signs preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dms {
    pub degrees: Decimal,
    pub minutes: Decimal,
    pub seconds: Decimal,
}

impl Dms {
    /// Split decimal degrees: degrees and minutes truncate toward zero,
    /// seconds round half away from zero
    pub fn from_degrees(value: Decimal) -> Self {
        let sixty = Decimal::from(60);

        let degrees = value.trunc();
        let minutes = (sixty * (value - degrees)).trunc();
        let seconds = (sixty * (sixty * (value - degrees) - minutes))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    fn render(&self, positive: char, negative: char) -> String {
        let hemisphere = if self.seconds > Decimal::ZERO {
            positive
        } else {
            negative
        };

        format!(
            "{:>3}\u{00B0} {:>2}' {:>2}\" {} ",
            magnitude(self.degrees),
            magnitude(self.minutes),
            magnitude(self.seconds),
            hemisphere
        )
    }
}

/// Haversine great-circle distance in meters between two points given in degrees
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat1 - lat2;
    let dlon = lon1 - lon2;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let arc = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_M * arc
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn magnitude(value: Decimal) -> i64 {
    value.abs().to_i64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn loc(lat: &str, lon: &str) -> Geolocation {
        Geolocation::new(d(lat), d(lon)).unwrap()
    }

    #[test]
    fn test_rejects_out_of_range() {
        for (lat, lon) in [("91", "0"), ("-91", "0"), ("0", "181"), ("0", "-181")] {
            let err = Geolocation::new(d(lat), d(lon)).unwrap_err();
            assert_eq!(
                err,
                GeoError::OutOfRange {
                    latitude: d(lat),
                    longitude: d(lon)
                }
            );
        }
        assert!(Geolocation::new(d("90.000001"), d("0")).is_err());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Geolocation::new(d("90"), d("180")).is_ok());
        assert!(Geolocation::new(d("-90"), d("-180")).is_ok());
    }

    #[test]
    fn test_dms_components() {
        let dms = Dms::from_degrees(d("-117.1611"));
        assert_eq!(dms.degrees, d("-117"));
        assert_eq!(dms.minutes, d("-9"));
        assert_eq!(dms.seconds, d("-40"));
    }

    #[test]
    fn test_dms_rounds_half_away_from_zero() {
        // 0.00125 degrees is exactly 4.5 arc-seconds
        assert_eq!(Dms::from_degrees(d("0.00125")).seconds, d("5"));
        assert_eq!(Dms::from_degrees(d("-0.00125")).seconds, d("-5"));
    }

    #[test]
    fn test_to_dms_san_diego() {
        let san_diego = loc("32.71513", "-117.1611");
        let dms = san_diego.to_dms();

        assert!(dms.starts_with(" 32\u{00B0}"));
        assert_eq!(dms, " 32\u{00B0} 42' 54\" N 117\u{00B0}  9' 40\" W ");
    }

    #[test]
    fn test_to_dms_southern_eastern() {
        let sydney = loc("-33.86767", "151.2094");
        // latitude seconds are negative, longitude seconds positive
        assert_eq!(
            sydney.to_dms(),
            " 33\u{00B0} 52'  4\" S 151\u{00B0} 12' 34\" E "
        );
    }

    #[test]
    fn test_to_dms_hemisphere_follows_seconds_sign() {
        // Whole degrees round to zero seconds and report S/W
        let whole = loc("10", "20");
        assert_eq!(
            whole.to_dms(),
            " 10\u{00B0}  0'  0\" S  20\u{00B0}  0'  0\" W "
        );
    }

    #[test]
    fn test_to_dms_idempotent() {
        let london = loc("51.51786", "-0.102216");
        assert_eq!(london.to_dms(), london.to_dms());
        assert_eq!(london.to_string(), london.to_dms());
    }

    #[test]
    fn test_zero_distance() {
        let a = loc("37.78352", "-122.4169");
        for unit in LengthUnit::ALL {
            assert_eq!(a.great_circle_distance_in(&a, unit), Decimal::ZERO);
        }
    }

    #[test]
    fn test_distance_symmetry() {
        let pairs = [
            (loc("32.71513", "-117.1611"), loc("37.78352", "-122.4169")),
            (loc("51.51786", "-0.102216"), loc("-33.86767", "151.2094")),
            (loc("-90", "-180"), loc("90", "180")),
        ];
        for (a, b) in pairs {
            for unit in LengthUnit::ALL {
                assert_eq!(
                    a.great_circle_distance_in(&b, unit),
                    b.great_circle_distance_in(&a, unit)
                );
            }
        }
    }

    #[test]
    fn test_default_unit_is_meters() {
        let a = loc("40.71015", "-74.00658");
        let b = loc("34.04983", "-118.2498");
        assert_eq!(
            a.great_circle_distance(&b),
            a.great_circle_distance_in(&b, LengthUnit::Meters)
        );
    }

    #[test]
    fn test_unit_scaling_consistency() {
        let a = loc("51.51786", "-0.102216");
        let b = loc("-33.86767", "151.2094");
        let meters = a.great_circle_distance(&b);
        let tolerance = Decimal::new(1, 4);

        let checks = [
            (LengthUnit::Kilometers, d("0.001")),
            (LengthUnit::Feet, d("3.2808399")),
            (LengthUnit::Miles, d("0.00062137119")),
        ];
        for (unit, factor) in checks {
            let direct = a.great_circle_distance_in(&b, unit);
            assert!(
                (meters * factor - direct).abs() < tolerance,
                "{unit}: {} vs {}",
                meters * factor,
                direct
            );
        }
    }

    #[test]
    fn test_san_diego_to_san_francisco_miles() {
        let sd = loc("32.71513", "-117.1611");
        let sf = loc("37.78352", "-122.4169");
        let miles = sd.great_circle_distance_in(&sf, LengthUnit::Miles);

        assert!(miles > d("458") && miles < d("462"), "got {miles}");
    }

    #[test]
    fn test_london_to_sydney_kilometers() {
        let london = loc("51.51786", "-0.102216");
        let sydney = loc("-33.86767", "151.2094");
        let km = london.great_circle_distance_in(&sydney, LengthUnit::Kilometers);

        assert!(km > d("16990") && km < d("17020"), "got {km}");
    }

    #[test]
    fn test_haversine_swapped_endpoints() {
        let points = [
            (32.71513, -117.1611, 37.78352, -122.4169),
            (51.51786, -0.102216, -33.86767, 151.2094),
            (-90.0, -180.0, 90.0, 180.0),
        ];
        for (lat1, lon1, lat2, lon2) in points {
            assert_eq!(
                haversine_meters(lat1, lon1, lat2, lon2),
                haversine_meters(lat2, lon2, lat1, lon1)
            );
        }
    }

    #[test]
    fn test_antipodes_clamped() {
        // sqrt(a) can drift just above 1 for antipodal points
        let meters = haversine_meters(0.0, 0.0, 0.0, 180.0);
        assert!((meters - EARTH_RADIUS_M * std::f64::consts::PI).abs() < 1e-3);
    }
}
