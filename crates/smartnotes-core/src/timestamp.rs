//! Timestamp helpers.
//!
//! Notes carry their timestamps as ISO-8601 strings in local time with
//! microsecond precision (`2026-01-01T09:30:00.000000`). Fixed-width fields
//! keep string comparison chronological, which the store relies on for
//! ordering.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::CoreError;

const ISO_LOCAL: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]");

const HUMAN: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

const FILE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]_[hour][minute][second]");

/// Length of the `YYYY-MM-DDTHH:MM:SS` prefix shown to users.
const DISPLAY_LEN: usize = 19;

fn now_local() -> OffsetDateTime {
    // The local offset is unavailable on some platforms (and in
    // multi-threaded processes on Unix); fall back to UTC there.
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Current time as a stored note timestamp.
pub fn now_iso() -> Result<String, CoreError> {
    Ok(now_local().format(ISO_LOCAL)?)
}

/// Current time as `YYYY-MM-DD HH:MM:SS`, used in export headers.
pub fn now_human() -> Result<String, CoreError> {
    Ok(now_local().format(HUMAN)?)
}

/// Current time as `YYYYMMDD_HHMMSS`, used in default export file names.
pub fn now_file_stamp() -> Result<String, CoreError> {
    Ok(now_local().format(FILE_STAMP)?)
}

/// Truncate a stored timestamp to second precision for display. Values that
/// are shorter than expected (hand-edited files) are returned unchanged.
pub fn display(timestamp: &str) -> &str {
    timestamp.get(..DISPLAY_LEN).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_timestamps_are_fixed_width() {
        let ts = now_iso().expect("format timestamp");
        assert_eq!(ts.len(), 26);
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[19..20], ".");
    }

    #[test]
    fn display_truncates_to_seconds() {
        assert_eq!(display("2026-01-01T09:30:00.123456"), "2026-01-01T09:30:00");
        assert_eq!(display("2026-01-01"), "2026-01-01");
    }

    #[test]
    fn file_stamp_has_no_separators_but_underscore() {
        let stamp = now_file_stamp().expect("format stamp");
        assert_eq!(stamp.len(), 15);
        assert!(stamp.chars().all(|c| c.is_ascii_digit() || c == '_'));
    }
}
