//! Package assembly: cover first, then every source document in order

use crate::merge::merge_documents;
use crate::source::{DocumentSource, fetch_source, http_client};
use crate::state::PackageState;
use crate::types::*;
use lopdf::{Document, Object, dictionary};
use pdf_cover::{CoverAssets, CoverLayout, CoverWarning, render_cover};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssemblyOptions {
    /// Per-request timeout for remote sources
    #[cfg_attr(feature = "serde", serde(with = "duration_secs"))]
    pub fetch_timeout: Duration,
    /// Written to the document info dictionary when set
    pub title: Option<String>,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(30),
            title: None,
        }
    }
}

#[cfg(feature = "serde")]
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

/// A source left out of the package, and why
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedSource {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct AssemblyReport {
    pub document: Document,
    /// Names of the sources merged after the cover, in order
    pub included: Vec<String>,
    pub skipped: Vec<SkippedSource>,
    /// Notices from cover rendering; empty when the cover was supplied as bytes
    pub cover_warnings: Vec<CoverWarning>,
}

impl AssemblyReport {
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }
}

/// Merge `cover` with every source that can be fetched and parsed.
///
/// A cover that does not parse is fatal. Failing sources are logged and
/// reported in [`AssemblyReport::skipped`].
pub async fn assemble_package(
    cover: Vec<u8>,
    sources: &[DocumentSource],
    options: &AssemblyOptions,
) -> Result<AssemblyReport> {
    let cover = tokio::task::spawn_blocking(move || Document::load_mem(&cover)).await??;
    let client = http_client(options.fetch_timeout)?;

    let mut documents = vec![cover];
    let mut included = Vec::new();
    let mut skipped = Vec::new();

    for source in sources {
        match load_source(&client, source).await {
            Ok(doc) if doc.get_pages().is_empty() => {
                log::warn!("Skipping {}: document has no pages", source.name());
                skipped.push(SkippedSource {
                    name: source.name().to_string(),
                    reason: "document has no pages".to_string(),
                });
            }
            Ok(doc) => {
                included.push(source.name().to_string());
                documents.push(doc);
            }
            Err(err) => {
                log::warn!("Skipping {}: {err}", source.name());
                skipped.push(SkippedSource {
                    name: source.name().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let title = options.title.clone();
    let document = tokio::task::spawn_blocking(move || {
        let mut merged = merge_documents(&documents)?;
        if let Some(title) = title {
            let info_id = merged.add_object(dictionary! {
                "Title" => Object::string_literal(title),
            });
            merged.trailer.set("Info", info_id);
        }
        Ok::<_, PackageError>(merged)
    })
    .await??;

    log::info!(
        "Assembled package: {} documents merged, {} skipped",
        included.len(),
        skipped.len()
    );
    Ok(AssemblyReport {
        document,
        included,
        skipped,
        cover_warnings: Vec::new(),
    })
}

/// Render the cover for `state` and assemble it with the state's documents
pub async fn build_package(
    state: &PackageState,
    assets: &CoverAssets,
    layout: &CoverLayout,
    options: &AssemblyOptions,
) -> Result<AssemblyReport> {
    let inputs = state.cover_inputs();
    let assets = assets.clone();
    let layout = layout.clone();
    let cover =
        tokio::task::spawn_blocking(move || render_cover(&inputs, &assets, &layout)).await??;

    let mut report = assemble_package(cover.bytes, &state.ordered_sources(), options).await?;
    report.cover_warnings = cover.warnings;
    Ok(report)
}

async fn load_source(client: &reqwest::Client, source: &DocumentSource) -> Result<Document> {
    let bytes = fetch_source(client, source).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Save the assembled document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, PackageError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    log::info!("Package written to {}", path.display());
    Ok(())
}
