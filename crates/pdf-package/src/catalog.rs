//! Spec-sheet library loaded from CSV
//!
//! Required columns: Category, Subcategory, Model, Description, URL, Image.
//! Rows without a Model or URL are dropped on load.

use crate::source::DocumentSource;
use crate::types::*;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 6] = ["Category", "Subcategory", "Model", "Description", "URL", "Image"];

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub category: String,
    pub subcategory: String,
    pub model: String,
    pub description: String,
    pub url: String,
    pub image: String,
}

impl CatalogEntry {
    pub fn to_source(&self) -> DocumentSource {
        DocumentSource::Remote {
            name: self.model.clone(),
            url: self.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = tokio::fs::read(path.as_ref()).await?;
        tokio::task::spawn_blocking(move || Self::from_reader(contents.as_slice())).await?
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers()?.clone();

        let mut columns = [0usize; 6];
        for (slot, name) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| PackageError::Config(format!("Catalog is missing column {name}")))?;
        }
        let [category, subcategory, model, description, url, image] = columns;

        let mut entries = Vec::new();
        let mut dropped = 0usize;
        for result in reader.records() {
            let record = result?;
            let field = |i: usize| record.get(i).unwrap_or("").trim().to_string();
            let entry = CatalogEntry {
                category: field(category),
                subcategory: field(subcategory),
                model: field(model),
                description: field(description),
                url: field(url),
                image: field(image),
            };
            if entry.model.is_empty() || entry.url.is_empty() {
                dropped += 1;
                continue;
            }
            entries.push(entry);
        }

        if dropped > 0 {
            log::debug!("Dropped {dropped} catalog rows without Model or URL");
        }
        log::info!("Loaded catalog with {} entries", entries.len());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.entries.iter().map(|e| e.category.as_str()))
    }

    pub fn subcategories(&self, category: &str) -> Vec<&str> {
        distinct(
            self.entries
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.subcategory.as_str()),
        )
    }

    pub fn products<'a>(&'a self, category: &'a str, subcategory: &'a str) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.category == category && e.subcategory == subcategory)
    }

    pub fn find_model(&self, model: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.model.eq_ignore_ascii_case(model.trim()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
