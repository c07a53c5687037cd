//! Color-code intake: CSS value normalization and the strict "#YYMMDD"
//! decimal-pair parse. Calendar knowledge lives in `crate::calendar`.

pub mod hex;
pub mod normalize;

pub use hex::{date_to_hex, parse_hex_to_date};
pub use normalize::normalize_color;
