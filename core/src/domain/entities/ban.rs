//! Visit-ban bookkeeping for inmate records.
//!
//! Ban periods are calendar approximations: duration text is derived from the
//! day difference using 365-day years, 30-day months and 7-day weeks, matching
//! what the admin dashboard displays and stores back to the record service.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use gp_shared::utils::validation::{Validate, ValidationErrors};

/// Whether a visit ban is open-ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BanTerm {
    /// Ban with a defined end date
    Temporary,
    /// Open-ended ban
    Permanent,
}

impl std::fmt::Display for BanTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BanTerm::Temporary => write!(f, "temporary"),
            BanTerm::Permanent => write!(f, "permanent"),
        }
    }
}

/// Visit-ban fields carried on an inmate record
///
/// All fields are optional on the wire; records that were never banned carry
/// none of them. Field names follow the record service's camelCase JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanRecord {
    /// Why visits are blocked
    #[serde(default)]
    pub ban_reason: Option<String>,

    /// Temporary or permanent
    #[serde(default)]
    pub ban_type: Option<BanTerm>,

    /// First day of the ban
    #[serde(default)]
    pub ban_start_date: Option<NaiveDate>,

    /// Last day of the ban; absent for permanent bans
    #[serde(default)]
    pub ban_end_date: Option<NaiveDate>,

    /// Human-readable duration, stored alongside the dates
    #[serde(default)]
    pub ban_duration: Option<String>,

    /// Free-form notes
    #[serde(default)]
    pub ban_notes: Option<String>,
}

fn plural(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{} {}s", count, unit)
    } else {
        format!("{} {}", count, unit)
    }
}

impl BanRecord {
    /// Human-readable length of the ban period
    ///
    /// `"Permanent"` for permanent bans; empty when the period is missing or
    /// invalid (end not after start).
    pub fn duration_text(&self) -> String {
        Self::calculate_duration_text(self.ban_type, self.ban_start_date, self.ban_end_date)
    }

    /// Compute the duration text for a candidate ban period
    ///
    /// Used while editing a ban, before the record is saved.
    pub fn calculate_duration_text(
        term: Option<BanTerm>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> String {
        if term == Some(BanTerm::Permanent) {
            return "Permanent".to_string();
        }

        let (start, end) = match (start, end) {
            (Some(start), Some(end)) => (start, end),
            _ => return String::new(),
        };

        if end <= start {
            return String::new();
        }

        let diff_days = (end - start).num_days();
        let years = diff_days / 365;
        let months = (diff_days % 365) / 30;
        let days = diff_days - years * 365 - months * 30;

        let mut parts = Vec::new();
        if years > 0 {
            parts.push(plural(years, "year"));
        }
        if months > 0 {
            parts.push(plural(months, "month"));
        }
        if days > 0 {
            parts.push(plural(days, "day"));
        }

        if parts.is_empty() {
            return plural(diff_days, "day");
        }

        parts.join(" ")
    }

    /// Time left on the ban as of now
    pub fn remaining_duration(&self) -> String {
        self.remaining_duration_at(Utc::now())
    }

    /// Time left on the ban as of `now`
    ///
    /// `"Permanent"` when there is no end date, `"Expired"` once the end date
    /// has passed, otherwise a years/months/weeks/days breakdown of the whole
    /// days remaining (`"Less than a day"` below that).
    pub fn remaining_duration_at(&self, now: DateTime<Utc>) -> String {
        let end = match self.ban_end_date {
            Some(end) => end,
            None => return "Permanent".to_string(),
        };

        let end_at = end
            .and_hms_opt(0, 0, 0)
            .expect("midnight is always a valid time")
            .and_utc();

        let remaining = end_at - now;
        if remaining <= Duration::zero() {
            return "Expired".to_string();
        }

        let total_days = remaining.num_days();
        let years = total_days / 365;
        let months = (total_days % 365) / 30;
        let weeks = ((total_days % 365) % 30) / 7;
        let days = ((total_days % 365) % 30) % 7;

        let mut parts = Vec::new();
        if years > 0 {
            parts.push(plural(years, "year"));
        }
        if months > 0 {
            parts.push(plural(months, "month"));
        }
        if weeks > 0 {
            parts.push(plural(weeks, "week"));
        }
        if days > 0 {
            parts.push(plural(days, "day"));
        }

        if parts.is_empty() {
            return "Less than a day".to_string();
        }

        parts.join(" ")
    }
}

impl Validate for BanRecord {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.ban_reason.as_deref().map_or(true, |r| r.trim().is_empty()) {
            errors.add_error("banReason", "Ban reason is required", "required");
        }
        if self.ban_type.is_none() {
            errors.add_error("banType", "Ban type is required", "required");
        }
        if self.ban_start_date.is_none() {
            errors.add_error("banStartDate", "Ban start date is required", "required");
        }

        if self.ban_type == Some(BanTerm::Temporary) {
            match (self.ban_start_date, self.ban_end_date) {
                (_, None) => {
                    errors.add_error(
                        "banEndDate",
                        "Ban end date is required for non-permanent bans",
                        "required",
                    );
                }
                (Some(start), Some(end)) if end <= start => {
                    errors.add_error(
                        "banEndDate",
                        "Ban end date must be after start date",
                        "range",
                    );
                }
                _ => {}
            }
        }

        if errors.has_errors() {
            Err(errors)
        } else {
            Ok(())
        }
    }
}
