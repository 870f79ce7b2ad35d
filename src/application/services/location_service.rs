//! Location lookup: resolution followed by path parsing.

use crate::application::services::LinkResolver;
use crate::domain::entities::ResolvedLocation;
use crate::error::AppError;
use crate::utils::path_grammar;

/// Service turning a raw map link into a [`ResolvedLocation`].
///
/// Stateless apart from its resolver configuration; every call is independent.
pub struct LocationService {
    resolver: LinkResolver,
}

impl LocationService {
    /// Creates a new location service.
    pub fn new(resolver: LinkResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &LinkResolver {
        &self.resolver
    }

    /// Resolves `raw` to a canonical URL and parses its path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Resolve`] if the link cannot be resolved and
    /// [`AppError::Parse`] if the canonical URL has no recognized shape.
    pub async fn locate(&self, raw: &[u8]) -> Result<ResolvedLocation, AppError> {
        let canonical = self.resolver.resolve(raw).await?;
        let location = path_grammar::parse(&canonical)?;

        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::ResolveError;
    use crate::domain::entities::{HostRules, PlaceKind};
    use crate::domain::upstream::MockRedirectSource;
    use crate::utils::path_grammar::ParseError;
    use std::sync::Arc;
    use std::time::Duration;

    fn service(source: MockRedirectSource) -> LocationService {
        LocationService::new(LinkResolver::new(
            Arc::new(source),
            HostRules::default(),
            Duration::from_secs(5),
        ))
    }

    #[tokio::test]
    async fn test_locate_long_form() {
        let mut source = MockRedirectSource::new();
        source.expect_fetch_location().times(0);

        let location = service(source)
            .locate(b"https://www.google.com/maps/search/40.0,-73.5")
            .await
            .unwrap();

        assert_eq!(location, ResolvedLocation::search(40.0, -73.5));
    }

    #[tokio::test]
    async fn test_locate_short_link() {
        let mut source = MockRedirectSource::new();
        source.expect_fetch_location().times(1).returning(|_| {
            Ok(Some(
                "https://www.google.com/maps/place/Some%20Place/@40.0,-73.5,15z/data=!3m1"
                    .to_string(),
            ))
        });

        let location = service(source)
            .locate(b"https://maps.app.goo.gl/xyz")
            .await
            .unwrap();

        assert_eq!(location.kind, PlaceKind::Place);
        assert_eq!(location.query.as_deref(), Some("Some Place"));
        assert_eq!(location.zoom.as_deref(), Some("15z"));
    }

    #[tokio::test]
    async fn test_locate_propagates_resolve_error() {
        let source = MockRedirectSource::new();

        let err = service(source)
            .locate(b"https://bing.com/maps")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Resolve(ResolveError::UnsupportedHost { .. })
        ));
    }

    #[tokio::test]
    async fn test_locate_propagates_parse_error() {
        let source = MockRedirectSource::new();

        let err = service(source)
            .locate(b"https://www.google.com/maps")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Parse(ParseError::UnrecognizedPathShape { segments: 2 })
        ));
    }

    #[tokio::test]
    async fn test_locate_is_repeatable() {
        let source = MockRedirectSource::new();
        let service = service(source);
        let input = b"https://www.google.com/maps/@40.0,-73.5,15z";

        let first = service.locate(input).await.unwrap();
        let second = service.locate(input).await.unwrap();

        assert_eq!(first, second);
    }
}
