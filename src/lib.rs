//! citydist - list sample cities and measure great-circle distances between them

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod menu;

pub use domain::{City, CityCatalog};
pub use error::GeoError;
pub use geometry::{Geolocation, LengthUnit};
