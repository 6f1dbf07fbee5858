pub mod geolocation;
pub mod units;

pub use geolocation::{Dms, EARTH_RADIUS_M, Geolocation, haversine_meters};
pub use units::LengthUnit;
