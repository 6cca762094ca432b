//! Search text entered by the user.

/// Search text as it is submitted to the API.
///
/// A [`Query`] is always trimmed and never empty, so holding one is proof that a request may be
/// issued for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trims `input` and wraps it as a [`Query`], or returns [`None`] when nothing but whitespace
    /// is left.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// The query percent-encoded for use as a URL query parameter.
    #[must_use]
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }

    /// The trimmed search text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
