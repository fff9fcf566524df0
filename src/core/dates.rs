//! Date/time derivation for the preview header and subject line.
//!
//! All strings are pure functions of a single instant passed in by the
//! caller; nothing here reads the clock.

use chrono::{DateTime, Offset, TimeZone};

/// Long-form date/time layout, e.g. `Tuesday, August 25, 2026 at 3:04 PM`.
const LONG_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M %p";

/// Date-only layout for the subject line, e.g. `August 25, 2026`.
const DATE_FORMAT: &str = "%B %-d, %Y";

/// The formatted date/time strings for one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDates {
    /// The instant in the invoice's local time zone
    pub local: String,
    /// The instant in US Eastern time
    pub eastern: String,
    /// The instant in GMT
    pub gmt: String,
    /// The local UTC offset as `UTC±HH:MM`
    pub utc_offset: String,
}

/// Formats one instant for the preview header: local, US Eastern, and GMT
/// renderings plus the local UTC offset label.
pub fn format_invoice_dates<Tz: TimeZone>(now: &DateTime<Tz>) -> InvoiceDates
where
    Tz::Offset: std::fmt::Display,
{
    let eastern = now.with_timezone(&chrono_tz::America::New_York);
    let gmt = now.with_timezone(&chrono_tz::Etc::GMT);

    InvoiceDates {
        local: now.format(LONG_FORMAT).to_string(),
        eastern: eastern.format(LONG_FORMAT).to_string(),
        gmt: gmt.format(LONG_FORMAT).to_string(),
        utc_offset: utc_offset_label(now.offset().fix().local_minus_utc()),
    }
}

/// Formats the date-only string used in the subject line.
pub fn format_invoice_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(DATE_FORMAT).to_string()
}

/// Renders an offset in seconds east of UTC as `UTC±HH:MM`.
pub fn utc_offset_label(offset_seconds: i32) -> String {
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let minutes = offset_seconds.unsigned_abs() / 60;
    format!("UTC{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}
