//! Offline OpenStreetMap ingest.
//!
//! `piste-etl` chains these steps: fetch downhill pistes and aerialways from
//! Overpass, merge nodes and ways into the nearest listed resort, optionally
//! filter out resorts with few members, then import the result into the
//! catalog tables. `extract` and `summarize` inspect a raw Overpass dump.

pub mod extract;
pub mod import;
pub mod merge;
pub mod osm;
pub mod overpass;
pub mod summary;

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::server::error::Error;

/// Reads and decodes a JSON file
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let bytes = tokio::fs::read(path).await?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Writes `value` as pretty printed JSON, replacing any existing file
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    let bytes = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(path, bytes).await?;

    Ok(())
}
