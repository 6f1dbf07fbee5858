use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::{City, CityCatalog};
use crate::error::GeoError;
use crate::geometry::LengthUnit;

fn default_color() -> bool {
    true
}
fn default_verbose() -> bool {
    false
}
fn default_unit() -> LengthUnit {
    City::DEFAULT_UNIT
}

/// Settings read from `citydist.toml`
///
/// ```toml
/// color = false
/// unit = "kilometers"
///
/// [[cities]]
/// name = "Tokyo"
/// province = "Tokyo"
/// country = "Japan"
/// latitude = "35.6895"
/// longitude = "139.6917"
/// ```
///
/// Leaving out `cities` keeps the built-in sample list.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    /// Unit used by the `distance` command when `--unit` is not given
    #[serde(default = "default_unit")]
    pub unit: LengthUnit,
    #[serde(default)]
    pub cities: Option<Vec<CityEntry>>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            verbose: default_verbose(),
            unit: default_unit(),
            cities: None,
        }
    }
}

/// One `[[cities]]` table
#[derive(Debug, Deserialize, Clone)]
pub struct CityEntry {
    pub name: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub country: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl CityEntry {
    pub fn to_city(&self) -> Result<City, GeoError> {
        City::from_coordinates(
            self.name.clone(),
            self.province.clone(),
            self.country.clone(),
            self.latitude,
            self.longitude,
        )
    }
}

impl FileConfig {
    /// Search the standard locations and return the first config that parses
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "loaded config");
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Read an explicitly requested config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Build the city catalog, falling back to the built-in list
    pub fn catalog(&self) -> Result<CityCatalog, GeoError> {
        match &self.cities {
            Some(entries) => {
                let cities = entries
                    .iter()
                    .map(CityEntry::to_city)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CityCatalog::new(cities))
            }
            None => CityCatalog::builtin(),
        }
    }

    /// Unit for the `distance` command: the `--unit` flag wins over the `unit` key
    pub fn distance_unit(&self, requested: Option<LengthUnit>) -> LengthUnit {
        requested.unwrap_or(self.unit)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("citydist.toml"));
    paths.push(PathBuf::from(".citydist.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("citydist").join("config.toml"));
        paths.push(config_dir.join("citydist.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".citydist.toml"));
    }

    paths
}
