//! Display state of the results area.

use crate::{api::open_library::SearchResult, Error};

/// Image used when a record has no cover, or its cover fails to load.
pub const PLACEHOLDER_COVER_URL: &str =
    "https://via.placeholder.com/200x300?text=No+Cover+Available";

const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Everything the results area can show.
///
/// A new [`View`] always replaces the previous one in full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// A search has been submitted and its response has not been shown yet.
    Loading,
    /// One card per record, in the order the API returned them.
    Results(Vec<Card>),
    /// The search succeeded but nothing matched.
    NoResults,
    /// The search failed, holding the description of the failure.
    Failed(String),
}

impl View {
    /// The view for a finished search: [`View::NoResults`] for an empty set, otherwise
    /// [`View::Results`].
    #[must_use]
    pub fn from_results(results: &[SearchResult]) -> Self {
        if results.is_empty() {
            Self::NoResults
        } else {
            Self::Results(results.iter().map(Card::from).collect())
        }
    }

    /// The error panel for `err`.
    #[must_use]
    pub fn from_error(err: &Error) -> Self {
        Self::Failed(err.to_string())
    }

    /// Number of cards in the view.
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            Self::Results(cards) => cards.len(),
            _ => 0,
        }
    }
}

/// Display-ready projection of a [`SearchResult`].
///
/// Text is kept unescaped here, escaping is the job of [`crate::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// Cover image, or [`PLACEHOLDER_COVER_URL`] when the record has none.
    pub cover_url: String,
    /// Title as received, possibly empty.
    pub title: String,
    /// Author names joined by ", ", or "Unknown Author".
    pub authors: String,
    /// First publish year, the card has no year line without it. A year of `0` counts as
    /// missing.
    pub year: Option<i32>,
}

impl From<&SearchResult> for Card {
    fn from(result: &SearchResult) -> Self {
        let authors = result
            .authors
            .as_ref()
            .filter(|names| !names.is_empty())
            .map_or_else(|| UNKNOWN_AUTHOR.to_owned(), |names| names.join(", "));

        Self {
            cover_url: result
                .cover_url()
                .unwrap_or_else(|| PLACEHOLDER_COVER_URL.to_owned()),
            title: result.title.clone(),
            authors,
            year: result.first_publish_year.filter(|year| *year != 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, View, PLACEHOLDER_COVER_URL};
    use crate::{api::open_library::SearchResult, Error, ErrorKind};

    fn hobbit() -> SearchResult {
        SearchResult {
            title: "The Hobbit".to_owned(),
            authors: Some(vec!["J.R.R. Tolkien".to_owned()]),
            first_publish_year: Some(1937),
            cover_id: Some(123),
        }
    }

    #[test]
    fn card_is_built_from_complete_record() {
        let card = Card::from(&hobbit());

        assert_eq!("https://covers.openlibrary.org/b/id/123-M.jpg", card.cover_url);
        assert_eq!("The Hobbit", card.title);
        assert_eq!("J.R.R. Tolkien", card.authors);
        assert_eq!(Some(1937), card.year);
    }

    #[test]
    fn authors_are_joined_in_order() {
        let result = SearchResult {
            authors: Some(vec!["Terry Pratchett".to_owned(), "Neil Gaiman".to_owned()]),
            ..SearchResult::default()
        };

        assert_eq!("Terry Pratchett, Neil Gaiman", Card::from(&result).authors);
    }

    #[test]
    fn missing_or_empty_authors_fall_back_to_unknown() {
        let missing = SearchResult::default();
        let empty = SearchResult {
            authors: Some(vec![]),
            ..SearchResult::default()
        };

        assert_eq!("Unknown Author", Card::from(&missing).authors);
        assert_eq!("Unknown Author", Card::from(&empty).authors);
    }

    #[test]
    fn missing_cover_uses_placeholder() {
        let card = Card::from(&SearchResult::default());
        assert_eq!(PLACEHOLDER_COVER_URL, card.cover_url);
    }

    #[test]
    fn zero_cover_and_year_are_treated_as_missing() {
        let result = SearchResult {
            first_publish_year: Some(0),
            cover_id: Some(0),
            ..hobbit()
        };
        let card = Card::from(&result);

        assert_eq!(PLACEHOLDER_COVER_URL, card.cover_url);
        assert_eq!(None, card.year);
    }

    #[test]
    fn empty_results_become_no_results() {
        assert_eq!(View::NoResults, View::from_results(&[]));
        assert_eq!(0, View::NoResults.card_count());
    }

    #[test]
    fn one_card_per_record() {
        let other = SearchResult {
            title: "Silmarillion".to_owned(),
            ..SearchResult::default()
        };
        let view = View::from_results(&[hobbit(), other]);

        assert_eq!(2, view.card_count());
        if let View::Results(cards) = view {
            assert_eq!("The Hobbit", cards[0].title);
            assert_eq!("Silmarillion", cards[1].title);
        }
    }

    #[test]
    fn failure_keeps_error_description() {
        let err = Error::new(ErrorKind::IO, "connection refused");
        assert_eq!(
            View::Failed("Network error: connection refused".to_owned()),
            View::from_error(&err)
        );
    }
}
