use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building geographic values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180]
    #[error(
        "The longitude or latitude was out of range (latitude {latitude}, longitude {longitude})"
    )]
    OutOfRange { latitude: Decimal, longitude: Decimal },

    /// Lookup matched neither an index nor a city name
    #[error("Unknown city '{query}': use a name or an index from 0 to {last}")]
    UnknownCity { query: String, last: usize },
}
