//! The Open Library search endpoint.

use log::{info, trace};
use serde::{Deserialize, Deserializer};

use crate::{query::Query, Error};

use super::Client;

/// Base of the public Open Library API.
pub const OPEN_LIBRARY_URL: &str = "https://openlibrary.org";

const COVERS_URL: &str = "https://covers.openlibrary.org/b/id";

/// Builds the search endpoint URL for `query` under `base`.
#[must_use]
pub fn search_url(base: &str, query: &Query) -> String {
    format!(
        "{}/search.json?q={}",
        base.trim_end_matches('/'),
        query.encoded()
    )
}

/// Searches the API at `base` and returns the records in the order they were received.
///
/// # Errors
///
/// Any [`Error`] produced by the [`Client`], see [`Client::get_json`].
pub fn search<C: Client>(
    client: &C,
    base: &str,
    query: &Query,
) -> Result<Vec<SearchResult>, Error> {
    info!("Searching for '{query}' using the Open Library API");
    let url = search_url(base, query);

    let SearchResponse { docs } = client.get_json(&url)?;

    trace!("Request was successful - {} record(s) received", docs.len());
    Ok(docs)
}

/// Body returned by the search endpoint.
///
/// A missing or `null` `docs` field is treated the same as an empty one.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    docs: Vec<SearchResult>,
}

/// Reads a `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One book record from a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    /// Title of the book, empty when the record has none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Author names in the order the API lists them.
    #[serde(rename = "author_name")]
    pub authors: Option<Vec<String>>,
    /// Year the work was first published.
    pub first_publish_year: Option<i32>,
    /// Identifier of the cover image.
    #[serde(rename = "cover_i")]
    pub cover_id: Option<i64>,
}

impl SearchResult {
    /// URL of the medium sized cover image, when the record has a cover identifier.
    ///
    /// An identifier of `0` does not name a cover.
    #[must_use]
    pub fn cover_url(&self) -> Option<String> {
        self.cover_id
            .filter(|id| *id != 0)
            .map(|id| format!("{COVERS_URL}/{id}-M.jpg"))
    }
}
