//! Inmate and visitor record types for the external record service.
//!
//! The record service is a separate REST backend; these types mirror its
//! camelCase JSON documents. The list helpers reproduce the admin
//! dashboard's pure roster logic (banned-only filtering, ordering, search)
//! so it is exercised and tested on this side of the boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ban::BanRecord;

/// Recorded sex of an inmate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[serde(alias = "Male")]
    Male,
    #[serde(alias = "Female")]
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Which record field a roster search matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    LastName,
    FirstName,
    InmateCode,
    Crime,
    BanReason,
    BanType,
}

/// Inmate record as served by the record service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inmate {
    /// Facility-assigned identifier
    #[serde(default)]
    pub inmate_code: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// Preformatted display name, when the record carries one
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub sex: Option<Sex>,

    #[serde(default)]
    pub crime: Option<String>,

    /// Whether visits are currently blocked for this inmate
    #[serde(default)]
    pub is_visit_banned: bool,

    /// Ban details, flattened into the record document
    #[serde(flatten)]
    pub ban: BanRecord,
}

impl Inmate {
    /// Display name: the preformatted full name, or "Last, First"
    pub fn display_name(&self) -> String {
        if let Some(full_name) = self.full_name.as_deref() {
            if !full_name.trim().is_empty() {
                return full_name.to_string();
            }
        }
        format!("{}, {}", self.last_name, self.first_name)
            .trim_matches(|c: char| c == ',' || c.is_whitespace())
            .to_string()
    }

    /// The lowercased value of a searchable field
    fn search_value(&self, field: SearchField) -> String {
        let value = match field {
            SearchField::LastName => self.last_name.clone(),
            SearchField::FirstName => self.first_name.clone(),
            SearchField::InmateCode => self.inmate_code.clone(),
            SearchField::Crime => self.crime.clone().unwrap_or_default(),
            SearchField::BanReason => self.ban.ban_reason.clone().unwrap_or_default(),
            SearchField::BanType => self
                .ban
                .ban_type
                .map(|t| t.to_string())
                .unwrap_or_default(),
        };
        value.to_lowercase()
    }

    /// Substring match on a searchable field; an empty query matches everything
    pub fn matches(&self, field: SearchField, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.search_value(field).contains(&query)
    }
}

/// Banned-inmate roster: visit-banned records only, optionally restricted by
/// sex, ordered by last name then first name
pub fn banned_roster(inmates: &[Inmate], sex: Option<Sex>) -> Vec<&Inmate> {
    let mut roster: Vec<&Inmate> = inmates
        .iter()
        .filter(|inmate| inmate.is_visit_banned)
        .filter(|inmate| sex.map_or(true, |wanted| inmate.sex == Some(wanted)))
        .collect();

    roster.sort_by(|a, b| {
        let last = a.last_name.to_lowercase().cmp(&b.last_name.to_lowercase());
        last.then_with(|| a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase()))
    });

    roster
}

/// Narrow a roster down to records matching the query on the given field
pub fn search_roster<'a>(
    roster: &[&'a Inmate],
    field: SearchField,
    query: &str,
) -> Vec<&'a Inmate> {
    roster
        .iter()
        .filter(|inmate| inmate.matches(field, query))
        .copied()
        .collect()
}

/// Visitor record as served by the record service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// Preformatted display name, when the record carries one
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,

    /// Relationship to the visited inmate
    #[serde(default)]
    pub relationship: Option<String>,

    /// Uploaded 1x1 photo filename, served under the record service's uploads path
    #[serde(default)]
    pub photo: Option<String>,

    /// Data-URL (or served image) of the visitor's QR code
    #[serde(default)]
    pub qr_code: Option<String>,
}

impl Visitor {
    /// Display name: the preformatted full name, or "First Last"
    pub fn display_name(&self) -> String {
        if let Some(full_name) = self.full_name.as_deref() {
            if !full_name.trim().is_empty() {
                return full_name.to_string();
            }
        }
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Whether the record carries a QR code (required for ID card printing)
    pub fn has_qr_code(&self) -> bool {
        self.qr_code.as_deref().map_or(false, |qr| !qr.is_empty())
    }
}
