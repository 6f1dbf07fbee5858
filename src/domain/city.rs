use rust_decimal::Decimal;
use std::fmt;

use crate::error::GeoError;
use crate::geometry::{Geolocation, LengthUnit};

/// Width of the `=` rule printed under the city listing header
const HEADER_RULE_WIDTH: usize = 75;

/// A named place with its administrative region, country and coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    name: String,
    province: String,
    country: String,
    location: Geolocation,
}

impl City {
    /// Unit used by [`City::distance_to`]
    pub const DEFAULT_UNIT: LengthUnit = LengthUnit::Miles;

    pub fn new(
        name: impl Into<String>,
        province: impl Into<String>,
        country: impl Into<String>,
        location: Geolocation,
    ) -> Self {
        Self {
            name: name.into(),
            province: province.into(),
            country: country.into(),
            location,
        }
    }

    /// Build a city straight from decimal-degree coordinates
    pub fn from_coordinates(
        name: impl Into<String>,
        province: impl Into<String>,
        country: impl Into<String>,
        latitude: Decimal,
        longitude: Decimal,
    ) -> Result<Self, GeoError> {
        let location = Geolocation::new(latitude, longitude)?;
        Ok(Self::new(name, province, country, location))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn location(&self) -> &Geolocation {
        &self.location
    }

    /// Distance to `other` in miles; zero when there is no other city
    pub fn distance_to(&self, other: Option<&City>) -> Decimal {
        self.distance_to_in(other, Self::DEFAULT_UNIT)
    }

    /// Distance to `other` in `unit`; zero when there is no other city
    pub fn distance_to_in(&self, other: Option<&City>, unit: LengthUnit) -> Decimal {
        match other {
            Some(city) => self.location.great_circle_distance_in(&city.location, unit),
            None => Decimal::ZERO,
        }
    }

    /// One listing row: name, province and country columns then DMS coordinates
    pub fn format(&self) -> String {
        format!(
            "{:<15} {:<10} {:<15} {}",
            self.name,
            self.province,
            self.country,
            self.location.to_dms()
        )
    }

    /// Column titles for [`City::format`] rows followed by an `=` rule
    pub fn format_header() -> String {
        format!(
            "{:<15} {:<10} {:<15} {}\n{}",
            "City",
            "Province",
            "Country",
            "Coordinates",
            "=".repeat(HEADER_RULE_WIDTH)
        )
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
