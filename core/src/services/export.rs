//! CSV export of the banned-inmate roster
//!
//! Produces the spreadsheet the admin dashboard offers for download. Every
//! cell is quoted, with embedded quotes doubled per RFC 4180.

use chrono::NaiveDate;

use crate::domain::entities::visitor::Inmate;

const CSV_HEADERS: [&str; 8] = [
    "Inmate Code",
    "Full Name",
    "Sex",
    "Crime",
    "Ban Type",
    "Duration",
    "Reason",
    "Notes",
];

fn escape_csv_value(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn csv_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| escape_csv_value(cell))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render the banned-inmate roster as CSV
///
/// Missing fields fall back the way the dashboard displays them ("N/A",
/// "No reason provided", "-"); the duration column is the live remaining
/// duration, not the stored text.
pub fn banned_inmates_to_csv(inmates: &[&Inmate]) -> String {
    let header = csv_row(&CSV_HEADERS.map(String::from));

    let rows = inmates.iter().map(|inmate| {
        let code = if inmate.inmate_code.is_empty() {
            "N/A".to_string()
        } else {
            inmate.inmate_code.clone()
        };
        let sex = inmate
            .sex
            .map(|s| s.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let crime = inmate.crime.clone().unwrap_or_else(|| "N/A".to_string());
        let ban_type = inmate
            .ban
            .ban_type
            .map(|t| t.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let reason = inmate
            .ban
            .ban_reason
            .clone()
            .unwrap_or_else(|| "No reason provided".to_string());
        let notes = inmate.ban.ban_notes.clone().unwrap_or_else(|| "-".to_string());

        csv_row(&[
            code,
            inmate.display_name(),
            sex,
            crime,
            ban_type,
            inmate.ban.remaining_duration(),
            reason,
            notes,
        ])
    });

    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Suggested download filename for an export generated on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("banned-pdls-{}.csv", date.format("%Y-%m-%d"))
}
