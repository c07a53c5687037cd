use rayon::prelude::*;

use crate::calendar;
use crate::parser;
use crate::types::{PaletteOptions, SwatchResult};

/// Run the full pipeline for one swatch: normalize → parse → validate,
/// flattened into a single result object for the JS side.
///
/// Every failure stage fills `error_kind` + `message` instead of erroring
/// across the NAPI boundary — absence-of-result is the only failure channel.
pub fn convert_swatch(input: &str, current_year_digits: u32) -> SwatchResult {
    let mut result = SwatchResult {
        input: input.to_string(),
        hex: None,
        year: None,
        month: None,
        day: None,
        full_year: None,
        display_date: None,
        valid: false,
        error_kind: None,
        message: None,
    };

    let Some(hex) = parser::normalize_color(input) else {
        result.error_kind = Some("malformed_input".to_string());
        result.message = Some(format!("Not a recognizable color: {input}."));
        return result;
    };
    result.hex = Some(hex.clone());

    let Some(parsed) = parser::parse_hex_to_date(&hex) else {
        result.error_kind = Some("malformed_input".to_string());
        result.message = Some(format!("The color {hex} has no all-numeric #YYMMDD reading."));
        return result;
    };
    result.year = Some(parsed.year);
    result.month = Some(parsed.month);
    result.day = Some(parsed.day);

    match calendar::is_date_valid(&parsed, current_year_digits) {
        Ok(resolved) => {
            result.full_year = Some(resolved.full_year);
            result.display_date = Some(calendar::display_date(&resolved));
            result.valid = true;
        }
        Err(err) => {
            result.error_kind = Some(err.kind().to_string());
            result.message = Some(err.message());
        }
    }

    result
}

/// Classify a whole palette in parallel — the hot path when the gradient
/// canvas wants every sampled swatch tagged with its date (or lack of one).
///
/// Uses Rayon's `par_iter()`; each swatch converts independently (no shared
/// mutable state) and output order matches input order.
pub fn scan_palette(options: &PaletteOptions) -> Vec<SwatchResult> {
    options
        .swatches
        .par_iter()
        .map(|swatch| convert_swatch(swatch, options.current_year_digits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_color_all_the_way_to_a_date() {
        let result = convert_swatch("rgb(36, 1, 1)", 26);
        assert!(result.valid);
        assert_eq!(result.hex.as_deref(), Some("#240101"));
        assert_eq!(result.year, Some(24));
        assert_eq!(result.month, Some(1));
        assert_eq!(result.day, Some(1));
        assert_eq!(result.full_year, Some(2024));
        assert_eq!(result.display_date.as_deref(), Some("January 1, 2024"));
        assert!(result.error_kind.is_none());
    }

    #[test]
    fn hex_letters_are_malformed_input() {
        // A perfectly fine CSS color with no all-numeric reading
        let result = convert_swatch("#ff0000", 26);
        assert!(!result.valid);
        assert_eq!(result.hex.as_deref(), Some("#ff0000"));
        assert_eq!(result.error_kind.as_deref(), Some("malformed_input"));
        assert!(result.year.is_none());
    }

    #[test]
    fn unrecognized_value_is_malformed_input() {
        let result = convert_swatch("not a color", 26);
        assert!(!result.valid);
        assert!(result.hex.is_none());
        assert_eq!(result.error_kind.as_deref(), Some("malformed_input"));
    }

    #[test]
    fn month_and_day_failures_keep_their_kinds() {
        let result = convert_swatch("#241325", 26);
        assert_eq!(result.error_kind.as_deref(), Some("invalid_month"));
        assert_eq!(result.month, Some(13));

        let result = convert_swatch("#240431", 26);
        assert_eq!(result.error_kind.as_deref(), Some("invalid_day"));
        assert_eq!(
            result.message.as_deref(),
            Some("The selected color maps to an invalid day for the chosen month: 31.")
        );
    }

    #[test]
    fn palette_scan_preserves_order_and_length() {
        let options = PaletteOptions {
            swatches: vec![
                "#240101".to_string(),
                "#ff0000".to_string(),
                "#991231".to_string(),
                "transparent".to_string(),
            ],
            current_year_digits: 26,
        };
        let results = scan_palette(&options);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].input, "#240101");
        assert!(results[0].valid);
        assert!(!results[1].valid);
        assert_eq!(results[2].full_year, Some(1999));
        assert_eq!(results[3].error_kind.as_deref(), Some("malformed_input"));
    }

    #[test]
    fn empty_palette_returns_empty() {
        let options = PaletteOptions {
            swatches: vec![],
            current_year_digits: 26,
        };
        assert!(scan_palette(&options).is_empty());
    }

    #[test]
    fn many_swatches_stress_test() {
        // 366 day codes across 2024 — every one should validate
        let mut swatches = Vec::new();
        for month in 1..=12u32 {
            for day in 1..=crate::calendar::days::days_in_month(2024, month) {
                swatches.push(format!("#24{month:02}{day:02}"));
            }
        }
        let options = PaletteOptions {
            swatches,
            current_year_digits: 26,
        };
        let results = scan_palette(&options);
        assert_eq!(results.len(), 366);
        assert!(results.iter().all(|r| r.valid));
    }

    #[test]
    fn result_serializes_to_json() {
        let result = convert_swatch("#240101", 26);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], true);
        assert_eq!(json["full_year"], 2024);
        assert_eq!(json["display_date"], "January 1, 2024");
    }
}
