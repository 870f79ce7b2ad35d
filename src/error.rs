//! Application error type and its wire representation.
//!
//! Every failure maps to a stable numeric code, an HTTP status and a fixed
//! public message. Internal detail (upstream error text, offending fields)
//! is only available through [`std::fmt::Display`] for logging.
//!
//! | Code | Status | Condition |
//! |---|---|---|
//! | 1 | 400 | Body unreadable |
//! | 2 | 400 | Body not a valid URL |
//! | 3 | 400 | Host unsupported |
//! | 4 | 500 | Outbound request construction failure |
//! | 5 | 502 | Outbound request failed |
//! | 6 | 502 | Redirect target missing/invalid |
//! | 7 | 502 | Path shape unrecognized |
//! | 8 | 502 | Coordinate field malformed (place URLs) |
//! | 9 | 502 | Coordinate not numeric (place URLs) |
//! | 10 | 502 | Coordinate field malformed (search URLs) |
//! | 11 | 502 | Coordinate not numeric (search URLs) |
//! | 12 | 429 | Client exceeded the request rate limit |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::services::ResolveError;
use crate::domain::entities::PlaceKind;
use crate::utils::path_grammar::ParseError;

const INVALID_RESPONSE: &str = "google maps provided an invalid response";
const INVALID_COORDINATES: &str = "google maps provided invalid coordinates";

#[derive(Serialize)]
struct ErrorBody {
    ok: bool,
    error: ErrorInfo,
}

/// Public error payload: `{ "code": ..., "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub code: u16,
    pub message: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read request body: {0}")]
    BodyUnreadable(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Rate limit exceeded, retry in {wait_seconds}s")]
    RateLimited { wait_seconds: u64 },
}

impl AppError {
    pub fn body_unreadable(reason: impl Into<String>) -> Self {
        Self::BodyUnreadable(reason.into())
    }

    /// Stable numeric error code.
    pub fn code(&self) -> u16 {
        match self {
            Self::BodyUnreadable(_) => 1,
            Self::Resolve(err) => match err {
                ResolveError::InvalidUrl => 2,
                ResolveError::UnsupportedHost { .. } => 3,
                ResolveError::RequestBuild(_) => 4,
                ResolveError::UpstreamRequestFailed(_) => 5,
                ResolveError::UpstreamInvalidResponse => 6,
            },
            Self::Parse(err) => match err {
                ParseError::UnrecognizedPathShape { .. } => 7,
                ParseError::MalformedCoordinateField {
                    kind: PlaceKind::Search,
                } => 10,
                ParseError::MalformedCoordinateField { .. } => 8,
                ParseError::CoordinateNotNumeric {
                    kind: PlaceKind::Search,
                    ..
                } => 11,
                ParseError::CoordinateNotNumeric { .. } => 9,
            },
            Self::RateLimited { .. } => 12,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BodyUnreadable(_)
            | Self::Resolve(ResolveError::InvalidUrl)
            | Self::Resolve(ResolveError::UnsupportedHost { .. }) => StatusCode::BAD_REQUEST,
            Self::Resolve(ResolveError::RequestBuild(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Resolve(_) | Self::Parse(_) => StatusCode::BAD_GATEWAY,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// Fixed public message for the error code.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BodyUnreadable(_) => "failed to read request body",
            Self::Resolve(err) => match err {
                ResolveError::InvalidUrl => "provided url is not valid",
                ResolveError::UnsupportedHost { .. } => "url is not a google maps url",
                ResolveError::RequestBuild(_) => "failed to initialize request",
                ResolveError::UpstreamRequestFailed(_) => "request to google maps failed",
                ResolveError::UpstreamInvalidResponse => INVALID_RESPONSE,
            },
            Self::Parse(err) => match err {
                ParseError::UnrecognizedPathShape { .. }
                | ParseError::MalformedCoordinateField { .. } => INVALID_RESPONSE,
                ParseError::CoordinateNotNumeric { .. } => INVALID_COORDINATES,
            },
            Self::RateLimited { .. } => "too many requests",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.code(),
            message: self.message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            ok: false,
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}
