#[macro_use]
extern crate napi_derive;

pub mod calendar;
pub mod engine;
pub mod parser;
pub mod types;

use types::{PaletteOptions, ParsedDate, SwatchResult, ValidationOutcome};

#[napi]
pub fn health_check() -> String {
    "chromachron-native ok".to_string()
}

/// Strict "#YYMMDD" parse: `#` + 6 hex characters, each pair read as a
/// base-10 integer. Null when the shape is wrong or a pair contains a hex
/// letter. No range validation — pair with `validate_date`.
#[napi]
pub fn parse_hex_to_date(code: String) -> Option<ParsedDate> {
    parser::parse_hex_to_date(&code)
}

/// Resolve the century and check the components against the real calendar.
/// `current_year_digits` is the caller's `new Date().getFullYear() % 100`,
/// supplied fresh per call — this module never reads the clock.
#[napi]
pub fn validate_date(parsed: ParsedDate, current_year_digits: u32) -> ValidationOutcome {
    match calendar::is_date_valid(&parsed, current_year_digits) {
        Ok(resolved) => ValidationOutcome {
            valid: true,
            full_year: Some(resolved.full_year),
            display_date: Some(calendar::display_date(&resolved)),
            error_kind: None,
            message: None,
        },
        Err(err) => ValidationOutcome {
            valid: false,
            full_year: None,
            display_date: None,
            error_kind: Some(err.kind().to_string()),
            message: Some(err.message()),
        },
    }
}

/// One-call pipeline for the widget: any CSS color value in, flattened
/// conversion outcome out.
#[napi]
pub fn convert_color(input: String, current_year_digits: u32) -> SwatchResult {
    engine::convert_swatch(&input, current_year_digits)
}

/// Batch entry point for the gradient canvas (parallel, order-preserving).
#[napi]
pub fn scan_palette(options: PaletteOptions) -> Vec<SwatchResult> {
    engine::scan_palette(&options)
}

/// Reverse mapping: format a two-digit-year date back into its "#YYMMDD"
/// color code. Null when a component won't fit its two decimal digits.
#[napi]
pub fn date_to_hex(year: u32, month: u32, day: u32) -> Option<String> {
    parser::date_to_hex(year, month, day)
}
