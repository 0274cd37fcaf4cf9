//! Cover text inputs and the conditional text they produce

use crate::constants::{DEFAULT_ROLE_LABEL, SUBMITTAL_PACKAGE, TO_BE_CONFIRMED};
use chrono::{Datelike, NaiveDate};

/// Recipient category shown with the party name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartyRole {
    Contractor,
    Engineer,
    Distributor,
    Utility,
}

impl PartyRole {
    pub fn label(&self) -> &'static str {
        match self {
            PartyRole::Contractor => "Contractor",
            PartyRole::Engineer => "Engineer",
            PartyRole::Distributor => "Distributor",
            PartyRole::Utility => "Utility",
        }
    }
}

/// Bid date after its to-be-confirmed / not-applicable flags are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BidDate {
    Date(NaiveDate),
    #[default]
    ToBeConfirmed,
    NotApplicable,
}

impl BidDate {
    /// Resolve the two independent flags into one state.
    ///
    /// Not-applicable wins over to-be-confirmed; to-be-confirmed wins over a
    /// supplied date; no date at all is to-be-confirmed.
    pub fn from_flags(date: Option<NaiveDate>, to_be_confirmed: bool, not_applicable: bool) -> Self {
        match (date, to_be_confirmed, not_applicable) {
            (_, _, true) => BidDate::NotApplicable,
            (Some(date), false, false) => BidDate::Date(date),
            _ => BidDate::ToBeConfirmed,
        }
    }
}

/// Everything the user types or picks for the cover
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverInputs {
    pub project_name: String,
    pub project_location: String,
    pub party_role: Option<PartyRole>,
    pub party_name: String,
    /// `None` when the preparation date is unknown
    pub date_prepared: Option<NaiveDate>,
    pub bid_date: BidDate,
}

impl CoverInputs {
    /// The three banner lines, uppercased
    pub fn title_lines(&self) -> Vec<String> {
        vec![
            or_placeholder(&self.project_name),
            or_placeholder(&self.project_location),
            SUBMITTAL_PACKAGE.to_string(),
        ]
    }

    /// The bottom metadata lines, in display order.
    ///
    /// A not-applicable bid date drops the last line only when `bid_date_omittable`;
    /// otherwise it renders as to be confirmed.
    pub fn bottom_lines(&self, bid_date_omittable: bool) -> Vec<String> {
        let role = self
            .party_role
            .map(|r| r.label().to_uppercase())
            .unwrap_or_else(|| DEFAULT_ROLE_LABEL.to_string());
        let party = or_placeholder(&self.party_name);

        let mut lines = vec![
            format!("{role}: {party}"),
            format!("DATE PREPARED: {}", format_mdy(self.date_prepared)),
        ];

        match self.bid_date {
            BidDate::NotApplicable if bid_date_omittable => {}
            BidDate::Date(date) => lines.push(format!("BID DATE: {}", format_mdy(Some(date)))),
            BidDate::ToBeConfirmed | BidDate::NotApplicable => {
                lines.push(format!("BID DATE: {TO_BE_CONFIRMED}"))
            }
        }

        lines
    }
}

/// `M/D/YYYY` without leading zeros, or the placeholder when unknown
pub fn format_mdy(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
        None => TO_BE_CONFIRMED.to_string(),
    }
}

fn or_placeholder(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        TO_BE_CONFIRMED.to_string()
    } else {
        trimmed.to_uppercase()
    }
}
