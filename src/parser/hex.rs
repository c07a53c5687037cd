use crate::types::ParsedDate;

/// Split a "#YYMMDD" color code into its three date components.
///
/// The pattern is strict: a leading `#` followed by exactly 6 hex characters.
/// Each 2-character pair is then read as BASE-10 — the mapping uses the digits
/// the user sees, not the numeric value of the color bytes. A pair containing
/// a hex letter (a-f) has no base-10 reading, so the whole code is rejected.
///
/// No range checks here: `#241725` comes back with month 17. That is the
/// validator's job.
///
/// Port of: src/lib/date-utils.ts -> parseHexToDate()
pub fn parse_hex_to_date(code: &str) -> Option<ParsedDate> {
    let digits = code.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let year = digits[0..2].parse().ok()?;
    let month = digits[2..4].parse().ok()?;
    let day = digits[4..6].parse().ok()?;

    Some(ParsedDate { year, month, day })
}

/// Format a two-digit-year date back into its "#YYMMDD" color code.
///
/// Structural fit only — each component must fit its two decimal digits.
/// Whether the date exists on the calendar is the validator's call.
pub fn date_to_hex(year: u32, month: u32, day: u32) -> Option<String> {
    if year > 99 || month > 12 || day > 31 {
        return None;
    }
    Some(format!("#{year:02}{month:02}{day:02}"))
}
