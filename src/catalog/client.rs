//! Blocking HTTP client for the remote catalog and orbital-elements APIs.
//!
//! These calls run inside IO-pool tasks, never on the render thread, so
//! the blocking client is fine here and keeps the call sites simple.

use serde::Deserialize;
use thiserror::Error;

use crate::elements::{RawElementsRecord, RawField};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
}

/// One entry from the catalog listing. Extra payload fields are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct CatalogEntry {
    pub id: RawField,
    #[serde(default)]
    pub name: Option<String>,
}

impl CatalogEntry {
    /// Stable identifier string for this entry.
    pub fn id_string(&self) -> String {
        self.id.as_id_string()
    }

    /// Display name, falling back to the id for unnamed objects.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Object {}", self.id_string()),
        }
    }
}

/// `GET {base}/objects?date=YYYY-MM-DD`: list the objects for a date.
pub fn fetch_catalog(
    client: &reqwest::blocking::Client,
    base_url: &str,
    date: &str,
) -> Result<Vec<CatalogEntry>, FetchError> {
    let url = format!("{base_url}/objects?date={date}");
    let response = client.get(&url).send()?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.json()?)
}

/// `GET {base}/orbital-elements/{id}`: fetch one object's raw elements.
pub fn fetch_elements(
    client: &reqwest::blocking::Client,
    base_url: &str,
    id: &str,
) -> Result<RawElementsRecord, FetchError> {
    let url = format!("{base_url}/orbital-elements/{id}");
    let response = client.get(&url).send()?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.json()?)
}
