//! Resolved location entity produced by the path grammar.

use serde::Serialize;

/// Kind of map reference a URL described.
///
/// Serialized with the wire names used in the `place_type` response field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlaceKind {
    /// `/maps/search/<lat>,<lon>`
    #[serde(rename = "search")]
    Search,
    /// `/maps/place/<query>/@<lat>,<lon>,<zoom>`
    #[serde(rename = "place")]
    Place,
    /// `/maps/@<lat>,<lon>,<zoom>`
    #[serde(rename = "place-direct")]
    PlaceDirect,
}

impl PlaceKind {
    /// Wire name of the kind, identical to its serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Place => "place",
            Self::PlaceDirect => "place-direct",
        }
    }
}

impl std::fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geolocation extracted from a canonical map URL.
///
/// `latitude` and `longitude` are always finite. `zoom` is the opaque third
/// coordinate token and only exists for [`PlaceKind::Place`] and
/// [`PlaceKind::PlaceDirect`]; `query` only exists for [`PlaceKind::Place`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub kind: PlaceKind,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: Option<String>,
    pub query: Option<String>,
}

impl ResolvedLocation {
    /// Location from a `/maps/search/...` URL.
    pub fn search(latitude: f64, longitude: f64) -> Self {
        Self {
            kind: PlaceKind::Search,
            latitude,
            longitude,
            zoom: None,
            query: None,
        }
    }

    /// Location from a `/maps/@...` URL.
    pub fn place_direct(latitude: f64, longitude: f64, zoom: String) -> Self {
        Self {
            kind: PlaceKind::PlaceDirect,
            latitude,
            longitude,
            zoom: Some(zoom),
            query: None,
        }
    }

    /// Location from a `/maps/place/<query>/@...` URL.
    pub fn place(latitude: f64, longitude: f64, zoom: String, query: String) -> Self {
        Self {
            kind: PlaceKind::Place,
            latitude,
            longitude,
            zoom: Some(zoom),
            query: Some(query),
        }
    }
}
