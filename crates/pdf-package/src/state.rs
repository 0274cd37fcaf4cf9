//! Application state for building one package
//!
//! Front ends mutate this through the event methods below; the mutually
//! exclusive selections (role, bid-date flags) are enforced here.

use crate::catalog::CatalogEntry;
use crate::source::DocumentSource;
use chrono::NaiveDate;
use pdf_cover::{BidDate, CoverInputs, PartyRole};

/// One document in the package, in output order
#[derive(Debug, Clone, PartialEq)]
pub enum PackageItem {
    Upload(DocumentSource),
    Catalog(CatalogEntry),
}

impl PackageItem {
    pub fn label(&self) -> &str {
        match self {
            PackageItem::Upload(source) => source.name(),
            PackageItem::Catalog(entry) => &entry.model,
        }
    }

    pub fn to_source(&self) -> DocumentSource {
        match self {
            PackageItem::Upload(source) => source.clone(),
            PackageItem::Catalog(entry) => entry.to_source(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageState {
    pub project_name: String,
    pub project_location: String,
    pub party_name: String,
    pub date_prepared: Option<NaiveDate>,
    pub bid_date: Option<NaiveDate>,
    role: Option<PartyRole>,
    date_prepared_unknown: bool,
    bid_date_tbc: bool,
    bid_date_na: bool,
    items: Vec<PackageItem>,
}

impl PackageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<PartyRole> {
        self.role
    }

    /// Select `role`, or clear the selection if it is already selected.
    pub fn select_role(&mut self, role: PartyRole) {
        self.role = if self.role == Some(role) {
            None
        } else {
            Some(role)
        };
    }

    pub fn bid_date_tbc(&self) -> bool {
        self.bid_date_tbc
    }

    pub fn bid_date_na(&self) -> bool {
        self.bid_date_na
    }

    /// Setting the to-be-confirmed flag clears not-applicable.
    pub fn set_bid_date_tbc(&mut self, value: bool) {
        self.bid_date_tbc = value;
        if value {
            self.bid_date_na = false;
        }
    }

    /// Setting the not-applicable flag clears to-be-confirmed.
    pub fn set_bid_date_na(&mut self, value: bool) {
        self.bid_date_na = value;
        if value {
            self.bid_date_tbc = false;
        }
    }

    pub fn date_prepared_unknown(&self) -> bool {
        self.date_prepared_unknown
    }

    pub fn set_date_prepared_unknown(&mut self, value: bool) {
        self.date_prepared_unknown = value;
    }

    pub fn items(&self) -> &[PackageItem] {
        &self.items
    }

    pub fn add_upload(&mut self, source: DocumentSource) {
        self.items.push(PackageItem::Upload(source));
    }

    /// Remove the first upload with this name. Returns whether one was removed.
    pub fn remove_upload(&mut self, name: &str) -> bool {
        let position = self
            .items
            .iter()
            .position(|item| matches!(item, PackageItem::Upload(s) if s.name() == name));
        position.map(|i| self.items.remove(i)).is_some()
    }

    /// Queue a catalog entry. Returns `false` if that model is already queued.
    pub fn queue_entry(&mut self, entry: CatalogEntry) -> bool {
        let already = self
            .items
            .iter()
            .any(|item| matches!(item, PackageItem::Catalog(e) if e.model == entry.model));
        if already {
            return false;
        }
        self.items.push(PackageItem::Catalog(entry));
        true
    }

    pub fn dequeue(&mut self, model: &str) -> bool {
        let before = self.items.len();
        self.items
            .retain(|item| !matches!(item, PackageItem::Catalog(e) if e.model == model));
        self.items.len() != before
    }

    /// Drop every queued catalog entry, keeping uploads
    pub fn clear_queue(&mut self) {
        self.items
            .retain(|item| matches!(item, PackageItem::Upload(_)));
    }

    /// Move the item at `from` so it ends up at index `to`.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    /// Reorder items by a permutation of current indices.
    ///
    /// Out-of-range and repeated indices are ignored; items not mentioned keep
    /// their relative order after the listed ones.
    pub fn apply_order(&mut self, order: &[usize]) {
        let mut taken = vec![false; self.items.len()];
        let mut reordered = Vec::with_capacity(self.items.len());
        for &index in order {
            if index < taken.len() && !taken[index] {
                taken[index] = true;
                reordered.push(self.items[index].clone());
            }
        }
        for (index, item) in self.items.iter().enumerate() {
            if !taken[index] {
                reordered.push(item.clone());
            }
        }
        self.items = reordered;
    }

    pub fn ordered_sources(&self) -> Vec<DocumentSource> {
        self.items.iter().map(PackageItem::to_source).collect()
    }

    pub fn cover_inputs(&self) -> CoverInputs {
        let date_prepared = if self.date_prepared_unknown {
            None
        } else {
            self.date_prepared
        };
        CoverInputs {
            project_name: self.project_name.clone(),
            project_location: self.project_location.clone(),
            party_role: self.role,
            party_name: self.party_name.clone(),
            date_prepared,
            bid_date: BidDate::from_flags(self.bid_date, self.bid_date_tbc, self.bid_date_na),
        }
    }
}
