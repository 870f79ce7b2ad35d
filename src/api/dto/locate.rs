//! DTOs for the locate endpoint.

use serde::Serialize;

use crate::domain::entities::{PlaceKind, ResolvedLocation};

/// Successful locate response: `{ "ok": true, "result": { ... } }`.
#[derive(Debug, Serialize)]
pub struct LocateResponse {
    pub ok: bool,
    pub result: LocationDto,
}

/// Wire form of a [`ResolvedLocation`].
///
/// `zoom` and `query` are always present; absent values are empty strings.
#[derive(Debug, Serialize, PartialEq)]
pub struct LocationDto {
    pub place_type: PlaceKind,
    pub lat: f64,
    pub lon: f64,
    pub zoom: String,
    pub query: String,
}

impl From<ResolvedLocation> for LocationDto {
    fn from(location: ResolvedLocation) -> Self {
        Self {
            place_type: location.kind,
            lat: location.latitude,
            lon: location.longitude,
            zoom: location.zoom.unwrap_or_default(),
            query: location.query.unwrap_or_default(),
        }
    }
}

impl From<ResolvedLocation> for LocateResponse {
    fn from(location: ResolvedLocation) -> Self {
        Self {
            ok: true,
            result: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_response_shape() {
        let response = LocateResponse::from(ResolvedLocation::search(40.0, -73.5));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "ok": true,
                "result": {
                    "place_type": "search",
                    "lat": 40.0,
                    "lon": -73.5,
                    "zoom": "",
                    "query": ""
                }
            })
        );
    }

    #[test]
    fn test_place_response_shape() {
        let location =
            ResolvedLocation::place(40.0, -73.5, "15z".to_string(), "Some Place".to_string());

        let value = serde_json::to_value(LocateResponse::from(location)).unwrap();

        assert_eq!(value["result"]["place_type"], "place");
        assert_eq!(value["result"]["zoom"], "15z");
        assert_eq!(value["result"]["query"], "Some Place");
    }
}
