pub mod century;
pub mod days;

use crate::types::{ParsedDate, ResolvedDate};

/// Why a parsed date failed validation.
///
/// The two kinds stay distinct all the way to the UI: the widget shows a
/// month-specific toast for one and a day-specific toast for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    InvalidMonth { month: u32 },
    InvalidDay { day: u32, days_in_month: u32 },
}

impl DateError {
    /// Stable machine-readable kind, crosses the NAPI boundary as a string.
    pub fn kind(&self) -> &'static str {
        match self {
            DateError::InvalidMonth { .. } => "invalid_month",
            DateError::InvalidDay { .. } => "invalid_day",
        }
    }

    /// Toast copy shown by the widget.
    pub fn message(&self) -> String {
        match self {
            DateError::InvalidMonth { month } => {
                format!("The selected color maps to an invalid month: {month}.")
            }
            DateError::InvalidDay { day, .. } => {
                format!("The selected color maps to an invalid day for the chosen month: {day}.")
            }
        }
    }
}

/// Validate parsed components against the real calendar.
///
/// Three stages: month bound check, century resolution, day bound check
/// against the resolved month's length (leap-year aware). Pure function of
/// its two inputs — `current_year_digits` is the caller's `fullYear % 100`,
/// supplied fresh per call, and no clock is read here.
///
/// Port of: src/lib/date-utils.ts -> isDateValid()
pub fn is_date_valid(
    parsed: &ParsedDate,
    current_year_digits: u32,
) -> Result<ResolvedDate, DateError> {
    let ParsedDate { year, month, day } = *parsed;

    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth { month });
    }

    let full_year = century::resolve_full_year(year, current_year_digits);

    let days_in_month = days::days_in_month(full_year, month);
    if day < 1 || day > days_in_month {
        return Err(DateError::InvalidDay { day, days_in_month });
    }

    Ok(ResolvedDate {
        year,
        month,
        day,
        full_year,
    })
}

/// Long-form date string, e.g. "January 1, 2024" — what the widget renders
/// next to the swatch and feeds into its haiku prompt.
pub fn display_date(date: &ResolvedDate) -> String {
    match days::month_name(date.month) {
        Some(name) => format!("{} {}, {}", name, date.day, date.full_year),
        // Unreachable for validated dates; ISO fallback keeps this total.
        None => format!("{}-{:02}-{:02}", date.full_year, date.month, date.day),
    }
}
