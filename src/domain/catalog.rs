use rust_decimal::Decimal;

use super::city::City;
use crate::error::GeoError;

/// Built-in sample cities as (name, province, country, latitude, longitude)
///
/// Coordinates are `Decimal::new(mantissa, scale)` pairs, e.g. `(3271513, 5)` is 32.71513.
const BUILTIN_CITIES: &[(&str, &str, &str, (i64, u32), (i64, u32))] = &[
    ("San Diego", "CA", "USA", (3271513, 5), (-1171611, 4)),
    ("San Francisco", "CA", "USA", (3778352, 5), (-1224169, 4)),
    ("Los Angeles", "CA", "USA", (3404983, 5), (-1182498, 4)),
    ("New York", "NY", "USA", (4071015, 5), (-7400658, 5)),
    ("London", "London", "England", (5151786, 5), (-102216, 6)),
    ("Sydney", "NSW", "Australia", (-3386767, 5), (1512094, 4)),
];

/// Immutable, ordered list of cities shown by the menu
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityCatalog {
    cities: Vec<City>,
}

impl CityCatalog {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// The six sample cities the program ships with
    pub fn builtin() -> Result<Self, GeoError> {
        let cities = BUILTIN_CITIES
            .iter()
            .map(|&(name, province, country, (lat, lat_scale), (lon, lon_scale))| {
                City::from_coordinates(
                    name,
                    province,
                    country,
                    Decimal::new(lat, lat_scale),
                    Decimal::new(lon, lon_scale),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(cities))
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// Find a city by 0-based index or case-insensitive name
    pub fn find(&self, query: &str) -> Option<&City> {
        let query = query.trim();
        if let Ok(index) = query.parse::<usize>() {
            return self.get(index);
        }
        self.cities
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(query))
    }

    /// Like [`CityCatalog::find`], but reports a miss as [`GeoError::UnknownCity`]
    pub fn lookup(&self, query: &str) -> Result<&City, GeoError> {
        self.find(query).ok_or_else(|| GeoError::UnknownCity {
            query: query.to_string(),
            last: self.len().saturating_sub(1),
        })
    }
}

impl<'a> IntoIterator for &'a CityCatalog {
    type Item = &'a City;
    type IntoIter = std::slice::Iter<'a, City>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}
