//! Where spec-sheet documents come from
//!
//! Sources are opaque to assembly: each yields the bytes of one complete PDF.

use crate::types::*;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    /// A file picked or uploaded by the user
    Upload { name: String, path: PathBuf },
    /// A library document fetched over HTTP
    Remote { name: String, url: String },
    /// Bytes already in memory
    Bytes { name: String, bytes: Vec<u8> },
}

impl DocumentSource {
    /// Upload named after the file
    pub fn upload(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        DocumentSource::Upload { name, path }
    }

    pub fn name(&self) -> &str {
        match self {
            DocumentSource::Upload { name, .. }
            | DocumentSource::Remote { name, .. }
            | DocumentSource::Bytes { name, .. } => name,
        }
    }
}

/// Build the HTTP client used for remote sources
pub fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(client)
}

/// Read the raw bytes of one source
pub async fn fetch_source(client: &reqwest::Client, source: &DocumentSource) -> Result<Vec<u8>> {
    match source {
        DocumentSource::Upload { path, .. } => Ok(tokio::fs::read(path).await?),
        DocumentSource::Remote { url, .. } => {
            log::debug!("Fetching {url}");
            let response = client.get(url).send().await?.error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        }
        DocumentSource::Bytes { bytes, .. } => Ok(bytes.clone()),
    }
}
