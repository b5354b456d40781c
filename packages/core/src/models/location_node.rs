//! Location Payload
//!
//! Geographic anchor of the hierarchy (crag, sector, wall). Locations carry
//! optional coordinates and usually own Routes or further Locations.

use serde::{Deserialize, Serialize};

/// WGS84 position of a location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Extra fields of a Location node
///
/// # Examples
///
/// ```rust
/// use rocdoc_core::models::{Coordinates, Location};
///
/// let location = Location::new().with_coords(Coordinates::new(46.54, 11.78));
/// assert_eq!(location.coords.map(|c| c.latitude), Some(46.54));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Optional position; persisted as `null` when unknown
    pub coords: Option<Coordinates>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coordinates
    pub fn with_coords(mut self, coords: Coordinates) -> Self {
        self.coords = Some(coords);
        self
    }
}
