use napi_derive::napi;
use serde::Serialize;

/// Equivalent of TypeScript ParsedDate (src/lib/date-utils.ts)
///
/// Raw output of the hex parser. `year` is the two-digit value (0-99);
/// `month` and `day` carry whatever digits the color held — range checks
/// happen in the validator, not here.
#[napi(object)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParsedDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

/// A fully validated date. `full_year` is always `1900 + year` or
/// `2000 + year`, and `day` always fits the resolved month.
#[napi(object)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub full_year: u32,
}

/// Validator verdict returned to JS (flattened — NAPI doesn't do sum types).
/// When `valid` is false, `error_kind` is "invalid_month" or "invalid_day"
/// and `message` carries the toast copy the widget shows.
#[napi(object)]
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub full_year: Option<u32>,
    /// Long-form date, e.g. "January 1, 2024".
    pub display_date: Option<String>,
    pub error_kind: Option<String>,
    pub message: Option<String>,
}

/// Full pipeline result for one swatch: normalize → parse → validate,
/// flattened into a single object for the JS side.
#[napi(object)]
#[derive(Debug, Clone, Serialize)]
pub struct SwatchResult {
    /// The color value as the caller supplied it.
    pub input: String,
    /// Canonical lowercase "#rrggbb", present once normalization succeeds.
    pub hex: Option<String>,
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub full_year: Option<u32>,
    /// Long-form date the widget displays and hands to its haiku prompt.
    pub display_date: Option<String>,
    pub valid: bool,
    /// "malformed_input" | "invalid_month" | "invalid_day"
    pub error_kind: Option<String>,
    pub message: Option<String>,
}

/// Batch request from JS: the gradient-canvas swatches plus the two-digit
/// current year the UI derived from its clock.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct PaletteOptions {
    pub swatches: Vec<String>,
    pub current_year_digits: u32,
}
