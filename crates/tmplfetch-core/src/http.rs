//! HTTP client factory.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::FetchError;
use crate::Result;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds a blocking HTTP client.
///
/// `None` leaves requests without a timeout.
///
/// # Errors
///
/// Returns [`FetchError::HttpClient`] if the TLS backend cannot be
/// initialized.
pub fn make_http_client(timeout: Option<Duration>) -> Result<Client> {
    Client::builder()
        .user_agent(APP_USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(FetchError::HttpClient)
}
