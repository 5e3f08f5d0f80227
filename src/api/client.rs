use std::time::Duration;

use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};

use crate::prelude::*;

/// Build a JSON client.
pub fn try_new(timeout: Duration) -> Result<Client> {
    let headers = HeaderMap::from_iter([
        (CONTENT_TYPE, HeaderValue::from_static("application/json")),
        (ACCEPT, HeaderValue::from_static("application/json")),
    ]);
    Ok(Client::builder().user_agent("pvpc").timeout(timeout).default_headers(headers).build()?)
}
