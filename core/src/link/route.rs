//! Route parsing for the three pages of the site.

use url::Url;

use super::{LinkError, PLAYBACK_PREFIX, decode_segment};
use crate::query::Query;

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: the composer
    Home,
    /// `/s/<segment>`: playback, or the empty state when there is no question
    Playback(Option<Query>),
    /// Anything else
    NotFound,
}

impl Route {
    /// Parse a location path such as `/s/hello%20world`.
    ///
    /// Query strings and fragments are ignored. One trailing slash is
    /// tolerated. A segment that is absent or decodes to the empty string
    /// yields `Playback(None)`.
    pub fn parse(path: &str) -> Result<Route, LinkError> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };

        if path.is_empty() || path == "/" {
            return Ok(Route::Home);
        }

        let Some(rest) = path.strip_prefix(PLAYBACK_PREFIX) else {
            return Ok(Route::NotFound);
        };

        let segment = match rest {
            "" => "",
            _ => match rest.strip_prefix('/') {
                Some(segment) => segment,
                None => return Ok(Route::NotFound),
            },
        };

        if segment.contains('/') {
            return Ok(Route::NotFound);
        }

        let decoded = decode_segment(segment)?;
        Ok(Route::Playback(Query::new(decoded)))
    }

    /// Parse either an absolute link (`https://host/s/...`) or a bare path.
    pub fn from_location(location: &str) -> Result<Route, LinkError> {
        match Url::parse(location) {
            Ok(url) => Route::parse(url.path()),
            Err(_) => Route::parse(location),
        }
    }

    /// The question this route plays back, if any.
    pub fn query(&self) -> Option<&Query> {
        match self {
            Route::Playback(query) => query.as_ref(),
            _ => None,
        }
    }
}
