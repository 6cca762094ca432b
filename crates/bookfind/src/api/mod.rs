//! Access to the remote search API.

use serde::de::DeserializeOwned;

pub mod open_library;

/// Transport used to issue GET requests against the search API.
pub trait Client
where
    Self: Default,
{
    /// Sends a GET request to `url` and deserializes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::IO`] when the request cannot be sent, [`ErrorKind::Status`] when the response
    /// status is not a success and [`ErrorKind::Deserialize`] when the body is not valid JSON for
    /// `T`.
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .get(url)
            .send()
            .map_err(|e| Error::wrap(ErrorKind::IO, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::new(ErrorKind::Status, status.to_string()));
        }

        resp.json()
            .map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_text_producer, request_count, MockClient, NetworkErrorProducer, Producer,
    StatusErrorProducer, URL_SINK,
};

use crate::{Error, ErrorKind};
