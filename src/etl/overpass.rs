//! Overpass API client used by `piste-etl fetch`.

use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client};

use crate::{etl::osm::OverpassResponse, server::error::Error};

/// Downhill pistes and aerialways worldwide, with way and relation centers
pub const DOWNHILL_QUERY: &str = r#"[out:json][timeout:1800];
(
  node["piste:type"="downhill"];
  way["piste:type"="downhill"];
  relation["piste:type"="downhill"];
  node["aerialway"];
  way["aerialway"];
  relation["aerialway"];
);
out center;
"#;

/// Client side limit, a little above the server side query timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(1860);

pub struct OverpassClient {
    client: Client,
    interpreter_url: String,
}

impl OverpassClient {
    /// Creates a new instance of [`OverpassClient`] for the given interpreter endpoint
    pub fn new(interpreter_url: impl Into<String>) -> Result<Self, Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            interpreter_url: interpreter_url.into(),
        })
    }

    /// Posts an Overpass QL query and decodes the JSON response
    ///
    /// # Returns
    /// - `Ok(OverpassResponse)` - Elements returned by the interpreter
    /// - `Err(Error::ReqwestError)` - Request failed, non-success status or undecodable body
    pub async fn query(&self, query: &str) -> Result<OverpassResponse, Error> {
        tracing::info!(url = %self.interpreter_url, "Querying Overpass interpreter");

        let response = self
            .client
            .post(&self.interpreter_url)
            .header(CONTENT_TYPE, "text/plain")
            .body(query.to_string())
            .send()
            .await?
            .error_for_status()?
            .json::<OverpassResponse>()
            .await?;

        Ok(response)
    }
}
