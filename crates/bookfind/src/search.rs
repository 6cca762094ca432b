//! Submitting searches and showing their outcome.

use log::{error, trace};

use crate::{
    api::{
        open_library::{self, OPEN_LIBRARY_URL},
        Client,
    },
    query::Query,
    view::View,
    Error,
};

/// The region a [`SearchClient`] shows its [`View`]s in.
pub trait ResultsArea {
    /// Replaces whatever the area currently shows with `view`.
    ///
    /// # Errors
    ///
    /// An [`Err`] with [`crate::ErrorKind::Output`] when the area cannot be updated.
    fn show(&mut self, view: &View) -> Result<(), Error>;
}

impl<A: ResultsArea + ?Sized> ResultsArea for &mut A {
    fn show(&mut self, view: &View) -> Result<(), Error> {
        (**self).show(view)
    }
}

/// Sequence number handed out for each submitted search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// What happened to a call to [`SearchClient::submit_query`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The input was blank: no request was issued and the area was left untouched.
    Ignored,
    /// The search ran and its view is now shown.
    Shown(View),
    /// A newer search was issued while this one was in flight, so its view was dropped.
    Stale,
}

/// Turns search text into a request against the search API and shows the outcome in a
/// [`ResultsArea`].
///
/// Only the most recently issued search may update the area: every search is tagged with a
/// [`Ticket`] and views arriving for an older ticket are discarded.
pub struct SearchClient<C: Client, A: ResultsArea> {
    client: C,
    area: A,
    base_url: String,
    latest: u64,
}

impl<C: Client, A: ResultsArea> SearchClient<C, A> {
    /// Creates a client for the Open Library API that shows its results in `area`.
    #[must_use]
    pub fn new(area: A) -> Self {
        Self::with_base_url(area, OPEN_LIBRARY_URL)
    }

    /// Creates a client for a search API served under `base_url`.
    #[must_use]
    pub fn with_base_url<S: Into<String>>(area: A, base_url: S) -> Self {
        Self {
            client: C::default(),
            area,
            base_url: base_url.into(),
            latest: 0,
        }
    }

    /// Submits `input` as a search and shows the outcome.
    ///
    /// Blank input is ignored. Otherwise the area shows [`View::Loading`] and is then replaced by
    /// the results, the "no results" message or the error panel. Failures of the search itself
    /// end up in the area and never in the returned [`Result`].
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned only when the area cannot be updated.
    pub fn submit_query(&mut self, input: &str) -> Result<Submission, Error> {
        let query = if let Some(query) = Query::parse(input) {
            query
        } else {
            trace!("Blank query ignored");
            return Ok(Submission::Ignored);
        };

        let ticket = self.begin(&query)?;
        let view = self.fetch(&query);

        if self.complete(ticket, view.clone())? {
            Ok(Submission::Shown(view))
        } else {
            Ok(Submission::Stale)
        }
    }

    /// Issues a new [`Ticket`] for `query` and shows the loading indicator.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the area cannot be updated.
    pub fn begin(&mut self, query: &Query) -> Result<Ticket, Error> {
        self.latest += 1;
        let ticket = Ticket(self.latest);
        trace!("Search for '{query}' issued as {ticket:?}");

        self.area.show(&View::Loading)?;
        Ok(ticket)
    }

    /// Runs the search for `query` and converts the outcome into the [`View`] to show.
    #[must_use]
    pub fn fetch(&self, query: &Query) -> View {
        match open_library::search(&self.client, &self.base_url, query) {
            Ok(results) => View::from_results(&results),
            Err(err) => {
                error!("Search for '{query}' failed: {err}");
                View::from_error(&err)
            }
        }
    }

    /// Shows `view` if `ticket` is the latest one issued and returns whether it was shown.
    ///
    /// # Errors
    ///
    /// An [`Err`] is returned when the area cannot be updated.
    pub fn complete(&mut self, ticket: Ticket, view: View) -> Result<bool, Error> {
        if ticket.0 != self.latest {
            trace!(
                "Dropping response for {ticket:?}, latest issued is {:?}",
                Ticket(self.latest)
            );
            return Ok(false);
        }

        self.area.show(&view)?;
        Ok(true)
    }

    /// The area results are shown in.
    #[must_use]
    pub const fn area(&self) -> &A {
        &self.area
    }

    /// Consumes the client, returning its area.
    #[allow(clippy::missing_const_for_fn)] // can't be const
    #[must_use]
    pub fn into_area(self) -> A {
        self.area
    }
}
