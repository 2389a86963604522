//! Query parameter types for list handlers.

use catalog_core::types::DbId;
use catalog_db::models::movie::MovieFilter;
use serde::Deserialize;

/// Raw `?director_id=&genre_id=` parameters of the movie listing.
///
/// Values are kept as text so a value that is not an integer reaches the
/// handler instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

impl MovieListParams {
    /// Parse into a repository filter.
    ///
    /// Returns `None` when a supplied value (the empty string included) is not
    /// an integer. No stored id can equal such a value, so the listing is empty.
    pub fn to_filter(&self) -> Option<MovieFilter> {
        Some(MovieFilter {
            director_id: parse_id(self.director_id.as_deref())?,
            genre_id: parse_id(self.genre_id.as_deref())?,
        })
    }
}

/// `Some(None)` for an absent parameter, `None` for one that never matches.
fn parse_id(raw: Option<&str>) -> Option<Option<DbId>> {
    match raw {
        None => Some(None),
        Some(s) => s.trim().parse().ok().map(Some),
    }
}
