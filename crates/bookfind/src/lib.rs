#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

pub mod api;
mod error;
pub mod query;
pub mod render;
pub mod search;
pub mod view;

pub use api::open_library::SearchResult;
pub use error::{Error, ErrorKind};
pub use query::Query;
pub use search::{ResultsArea, SearchClient, Submission, Ticket};
pub use view::{Card, View};

/// The blocking HTTP client used to reach the search API.
pub type HttpClient = reqwest::blocking::Client;
