//! Request plumbing shared by both backend clients.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::SourceError;

/// Query parameters whose values must never reach logs or error messages.
const SECRET_PARAMS: &[&str] = &["consumer_key", "consumer_secret"];

/// Builds the `reqwest::Client` used by a backend client.
///
/// # Errors
///
/// Returns [`SourceError::Http`] if the client cannot be constructed
/// (e.g., invalid TLS config).
pub(crate) fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, SourceError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Sends `request` and returns the raw response, whatever its status.
///
/// The URL is stripped from transport errors because WooCommerce requests
/// carry credentials in the query string.
pub(crate) async fn send(request: RequestBuilder) -> Result<Response, SourceError> {
    request
        .send()
        .await
        .map_err(|e| SourceError::Http(e.without_url()))
}

/// Reads the body of a successful response as JSON.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: Response,
    context: &str,
) -> Result<T, SourceError> {
    let body = response
        .text()
        .await
        .map_err(|e| SourceError::Http(e.without_url()))?;
    serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

/// Sends `request`, requires a 2xx status, and parses the body as JSON.
///
/// `context` identifies the request in error messages; pass a
/// [`redacted`] URL, never the raw one.
///
/// # Errors
///
/// - [`SourceError::Http`] on network failure.
/// - [`SourceError::UnexpectedStatus`] on any non-2xx status.
/// - [`SourceError::Deserialize`] if the body is not the expected shape.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    context: &str,
) -> Result<T, SourceError> {
    let response = send(request).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::UnexpectedStatus {
            status: status.as_u16(),
            url: context.to_owned(),
        });
    }
    decode_json(response, context).await
}

/// Renders `url` with credential query values replaced by `[redacted]`.
pub(crate) fn redacted(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| is_secret(&k)) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if is_secret(&k) {
                "[redacted]".to_owned()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();

    let mut clean = url.clone();
    clean.query_pairs_mut().clear().extend_pairs(pairs);
    clean.to_string()
}

fn is_secret(name: &str) -> bool {
    SECRET_PARAMS.contains(&name)
}
