//! Path grammar for canonical long-form map URLs.
//!
//! A canonical URL path is split into segments and matched against three
//! ordered alternatives. The first matching shape wins and there is no
//! backtracking: once a shape is selected, its field errors are final.
//!
//! | Priority | Shape | Layout | Coordinate field |
//! |---|---|---|---|
//! | 1 | [`PathShape::Search`] | exactly 4 segments, `segment[2] == "search"` | `segment[3]` = `<lat>,<marker><lon>` |
//! | 2 | [`PathShape::PlaceDirect`] | `segment[2]` starts with `@` | `segment[2]` = `<marker><lat>,<lon>,<zoom>` |
//! | 3 | [`PathShape::Place`] | at least 5 segments | `segment[4]` = `<marker><lat>,<lon>,<zoom>`, query in `segment[3]` |
//!
//! Trailing segments after the coordinate field of a place URL (e.g.
//! `data=...`) are ignored.

use std::borrow::Cow;

use url::Url;

use crate::domain::entities::{PathSegments, PlaceKind, ResolvedLocation};
use crate::utils::percent::{decode_query_component, decode_segment};

/// Errors produced while parsing a canonical map URL path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Path with {segments} segments matches no known shape")]
    UnrecognizedPathShape { segments: usize },

    #[error("Coordinate field of {kind} URL has too few parts")]
    MalformedCoordinateField { kind: PlaceKind },

    #[error("Coordinate {field:?} of {kind} URL is not a finite number")]
    CoordinateNotNumeric { kind: PlaceKind, field: String },
}

/// One of the recognized path layouts, holding its raw fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathShape<'a> {
    Search { coordinates: &'a str },
    PlaceDirect { coordinates: &'a str },
    Place { query: &'a str, coordinates: &'a str },
}

impl<'a> PathShape<'a> {
    /// Selects the shape of a path, in priority order.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnrecognizedPathShape`] if no shape matches.
    pub fn select(segments: &PathSegments<'a>) -> Result<Self, ParseError> {
        match segments.as_slice() {
            &[_, _, "search", coordinates] => Ok(Self::Search { coordinates }),
            &[_, _, coordinates, ..] if coordinates.starts_with('@') => {
                Ok(Self::PlaceDirect { coordinates })
            }
            &[_, _, _, query, coordinates, ..] => Ok(Self::Place { query, coordinates }),
            _ => Err(ParseError::UnrecognizedPathShape {
                segments: segments.len(),
            }),
        }
    }

    pub fn kind(&self) -> PlaceKind {
        match self {
            Self::Search { .. } => PlaceKind::Search,
            Self::PlaceDirect { .. } => PlaceKind::PlaceDirect,
            Self::Place { .. } => PlaceKind::Place,
        }
    }

    /// Extracts the typed fields of the selected shape.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedCoordinateField`] if the coordinate field
    /// has too few comma-separated parts and [`ParseError::CoordinateNotNumeric`]
    /// if latitude or longitude is not a finite number.
    pub fn extract(self) -> Result<ResolvedLocation, ParseError> {
        let kind = self.kind();

        match self {
            Self::Search { coordinates } => {
                let field = decode_coordinates(coordinates);
                let mut parts = field.split(',');

                let (Some(latitude), Some(longitude)) = (parts.next(), parts.next()) else {
                    return Err(ParseError::MalformedCoordinateField { kind });
                };

                let latitude = parse_coordinate(latitude, kind)?;
                let longitude = parse_coordinate(strip_marker(longitude), kind)?;

                Ok(ResolvedLocation::search(latitude, longitude))
            }
            Self::PlaceDirect { coordinates } => {
                let (latitude, longitude, zoom) = parse_zoomed(coordinates, kind)?;

                Ok(ResolvedLocation::place_direct(latitude, longitude, zoom))
            }
            Self::Place { query, coordinates } => {
                let (latitude, longitude, zoom) = parse_zoomed(coordinates, kind)?;

                // An undecodable query never blocks valid coordinates.
                let query = decode_query_component(query).unwrap_or_default();

                Ok(ResolvedLocation::place(latitude, longitude, zoom, query))
            }
        }
    }
}

/// Parses a canonical long-form map URL into a [`ResolvedLocation`].
///
/// Pure function of its input: the same URL always yields the same result.
///
/// # Errors
///
/// See [`PathShape::select`] and [`PathShape::extract`].
///
/// # Examples
///
/// ```
/// use maps_locator::utils::path_grammar::parse;
/// use url::Url;
///
/// let url = Url::parse("https://www.google.com/maps/@40.0,-73.5,15z").unwrap();
/// let location = parse(&url).unwrap();
///
/// assert_eq!(location.latitude, 40.0);
/// assert_eq!(location.zoom.as_deref(), Some("15z"));
/// ```
pub fn parse(url: &Url) -> Result<ResolvedLocation, ParseError> {
    let segments = PathSegments::from_url(url);
    PathShape::select(&segments)?.extract()
}

/// Parses `<marker><lat>,<lon>,<zoom>[,...]`.
fn parse_zoomed(coordinates: &str, kind: PlaceKind) -> Result<(f64, f64, String), ParseError> {
    let field = decode_coordinates(coordinates);
    let parts: Vec<&str> = field.split(',').collect();

    let &[latitude, longitude, zoom, ..] = parts.as_slice() else {
        return Err(ParseError::MalformedCoordinateField { kind });
    };

    let latitude = parse_coordinate(strip_marker(latitude), kind)?;
    let longitude = parse_coordinate(longitude, kind)?;

    Ok((latitude, longitude, zoom.to_string()))
}

/// Percent-decodes a coordinate field, keeping the raw text if it does not decode.
fn decode_coordinates(raw: &str) -> Cow<'_, str> {
    match decode_segment(raw) {
        Some(decoded) => Cow::Owned(decoded),
        None => Cow::Borrowed(raw),
    }
}

/// Drops the one-character marker (`@`, `+`, ...) preceding a coordinate.
///
/// Only a character that cannot start a decimal literal counts as a marker.
fn strip_marker(field: &str) -> &str {
    match field.chars().next() {
        Some(c) if !(c.is_ascii_digit() || c == '-' || c == '.') => &field[c.len_utf8()..],
        _ => field,
    }
}

fn parse_coordinate(text: &str, kind: PlaceKind) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::CoordinateNotNumeric {
            kind,
            field: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_path(path: &str) -> Result<ResolvedLocation, ParseError> {
        let url = Url::parse(&format!("https://www.google.com{path}")).unwrap();
        parse(&url)
    }

    #[test]
    fn test_search_shape() {
        let location = parse_path("/maps/search/40.0,-73.5").unwrap();

        assert_eq!(location, ResolvedLocation::search(40.0, -73.5));
    }

    #[test]
    fn test_search_shape_strips_longitude_marker() {
        let location = parse_path("/maps/search/40.7128,+-74.006").unwrap();

        assert_eq!(location.latitude, 40.7128);
        assert_eq!(location.longitude, -74.006);
    }

    #[test]
    fn test_search_shape_encoded_marker() {
        let location = parse_path("/maps/search/51.5,%2B0.12").unwrap();

        assert_eq!(location.longitude, 0.12);
    }

    #[test]
    fn test_search_shape_single_part_is_malformed() {
        assert_eq!(
            parse_path("/maps/search/40.0").unwrap_err(),
            ParseError::MalformedCoordinateField {
                kind: PlaceKind::Search
            }
        );
    }

    #[test]
    fn test_search_shape_non_numeric() {
        let err = parse_path("/maps/search/40.0,abc").unwrap_err();

        assert!(matches!(
            err,
            ParseError::CoordinateNotNumeric {
                kind: PlaceKind::Search,
                ..
            }
        ));
    }

    #[test]
    fn test_search_shape_empty_longitude() {
        let err = parse_path("/maps/search/40.0,").unwrap_err();

        assert!(matches!(err, ParseError::CoordinateNotNumeric { .. }));
    }

    #[test]
    fn test_search_term_instead_of_coordinates() {
        let err = parse_path("/maps/search/pizza+near+me").unwrap_err();

        assert_eq!(
            err,
            ParseError::MalformedCoordinateField {
                kind: PlaceKind::Search
            }
        );
    }

    #[test]
    fn test_place_direct_shape() {
        let location = parse_path("/maps/@40.0,-73.5,15z").unwrap();

        assert_eq!(
            location,
            ResolvedLocation::place_direct(40.0, -73.5, "15z".to_string())
        );
    }

    #[test]
    fn test_place_direct_ignores_trailing_segments() {
        let location = parse_path("/maps/@48.8583701,2.2944813,17z/data=!3m1!4b1").unwrap();

        assert_eq!(location.kind, PlaceKind::PlaceDirect);
        assert_eq!(location.latitude, 48.8583701);
        assert_eq!(location.longitude, 2.2944813);
        assert_eq!(location.zoom.as_deref(), Some("17z"));
    }

    #[test]
    fn test_place_direct_radius_token_verbatim() {
        let location = parse_path("/maps/@40.0,-73.5,3000m").unwrap();

        assert_eq!(location.zoom.as_deref(), Some("3000m"));
    }

    #[test]
    fn test_place_direct_too_few_parts() {
        assert_eq!(
            parse_path("/maps/@40.0,-73.5").unwrap_err(),
            ParseError::MalformedCoordinateField {
                kind: PlaceKind::PlaceDirect
            }
        );
    }

    #[test]
    fn test_place_direct_non_numeric() {
        let err = parse_path("/maps/@40.0,abc,15z").unwrap_err();

        assert_eq!(
            err,
            ParseError::CoordinateNotNumeric {
                kind: PlaceKind::PlaceDirect,
                field: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_place_direct_does_not_fall_back_to_place() {
        // Five segments would satisfy the place shape, but `@` selects place-direct.
        let err = parse_path("/maps/@bad/Some%20Place/@40.0,-73.5,15z").unwrap_err();

        assert_eq!(
            err,
            ParseError::MalformedCoordinateField {
                kind: PlaceKind::PlaceDirect
            }
        );
    }

    #[test]
    fn test_place_shape() {
        let location = parse_path("/maps/place/Some%20Place/@40.0,-73.5,15z").unwrap();

        assert_eq!(
            location,
            ResolvedLocation::place(
                40.0,
                -73.5,
                "15z".to_string(),
                "Some Place".to_string()
            )
        );
    }

    #[test]
    fn test_place_shape_plus_as_space() {
        let location =
            parse_path("/maps/place/Eiffel+Tower/@48.8583701,2.2944813,17z/data=!3m1").unwrap();

        assert_eq!(location.query.as_deref(), Some("Eiffel Tower"));
        assert_eq!(location.kind, PlaceKind::Place);
    }

    #[test]
    fn test_place_shape_malformed_query_degrades_to_empty() {
        let location = parse_path("/maps/place/Caf%E9%/@40.0,-73.5,15z").unwrap();

        assert_eq!(location.query.as_deref(), Some(""));
        assert_eq!(location.latitude, 40.0);
        assert_eq!(location.longitude, -73.5);
    }

    #[test]
    fn test_place_shape_coordinate_without_marker() {
        let location = parse_path("/maps/place/Somewhere/40.0,-73.5,15z").unwrap();

        assert_eq!(location.latitude, 40.0);
    }

    #[test]
    fn test_place_shape_too_few_parts() {
        assert_eq!(
            parse_path("/maps/place/Somewhere/@40.0").unwrap_err(),
            ParseError::MalformedCoordinateField {
                kind: PlaceKind::Place
            }
        );
    }

    #[test]
    fn test_place_shape_non_numeric_latitude() {
        let err = parse_path("/maps/place/Somewhere/data=!4m2,x,y").unwrap_err();

        assert!(matches!(
            err,
            ParseError::CoordinateNotNumeric {
                kind: PlaceKind::Place,
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        for path in [
            "/maps/@NaN,-73.5,15z",
            "/maps/@40.0,inf,15z",
            "/maps/@40.0,-Infinity,15z",
            "/maps/search/40.0,+NaN",
            "/maps/@1e400,2,15z",
        ] {
            let err = parse_path(path).unwrap_err();
            assert!(
                matches!(err, ParseError::CoordinateNotNumeric { .. }),
                "{path} -> {err:?}"
            );
        }
    }

    #[test]
    fn test_unrecognized_shapes() {
        for (path, segments) in [
            ("/", 2),
            ("/maps", 2),
            ("/maps/place", 3),
            ("/maps/place/Somewhere", 4),
        ] {
            assert_eq!(
                parse_path(path).unwrap_err(),
                ParseError::UnrecognizedPathShape { segments },
                "{path}"
            );
        }
    }

    #[test]
    fn test_search_requires_exact_segment_count() {
        // Five segments: not a search, handled as a place URL.
        let location = parse_path("/maps/search/Some%20Query/@40.0,-73.5,15z").unwrap();

        assert_eq!(location.kind, PlaceKind::Place);
        assert_eq!(location.query.as_deref(), Some("Some Query"));
    }

    #[test]
    fn test_select_priority() {
        let search = PathSegments::from_path("/maps/search/1,2");
        let direct = PathSegments::from_path("/maps/@1,2,3z");
        let place = PathSegments::from_path("/maps/place/q/@1,2,3z");

        assert_eq!(
            PathShape::select(&search).unwrap(),
            PathShape::Search { coordinates: "1,2" }
        );
        assert_eq!(
            PathShape::select(&direct).unwrap(),
            PathShape::PlaceDirect {
                coordinates: "@1,2,3z"
            }
        );
        assert_eq!(
            PathShape::select(&place).unwrap(),
            PathShape::Place {
                query: "q",
                coordinates: "@1,2,3z"
            }
        );
    }

    #[test]
    fn test_query_string_does_not_affect_parsing() {
        let location = parse_path("/maps/@40.0,-73.5,15z?entry=ttu&g_ep=abc").unwrap();

        assert_eq!(location.zoom.as_deref(), Some("15z"));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let url = Url::parse("https://www.google.com/maps/place/Some%20Place/@40.0,-73.5,15z")
            .unwrap();

        assert_eq!(parse(&url), parse(&url));
    }

    #[test]
    fn test_strip_marker() {
        assert_eq!(strip_marker("@40.0"), "40.0");
        assert_eq!(strip_marker("+-73.5"), "-73.5");
        assert_eq!(strip_marker("-73.5"), "-73.5");
        assert_eq!(strip_marker(".5"), ".5");
        assert_eq!(strip_marker(""), "");
    }
}
