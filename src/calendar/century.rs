/// Resolve a two-digit year to a full year using a sliding 30-year window.
///
/// A two-digit year is read as the nearest occurrence within roughly 30
/// years of "now": up to 30 years ahead it is 20xx, otherwise 19xx. The
/// window edge is `(current_year_digits + 30) % 100`, and because that
/// threshold can wrap past 100 the comparison splits into two branches.
///
/// `current_year_digits` is the caller's `fullYear % 100` — this function
/// never touches the clock.
///
/// Port of: src/lib/date-utils.ts -> isDateValid() (century step)
pub fn resolve_full_year(year: u32, current_year_digits: u32) -> u32 {
    let future_year_threshold = (current_year_digits + 30) % 100;

    if current_year_digits < 70 {
        // No wrap. e.g. digits 24 -> threshold 54: 40 is 2040, 60 is 1960.
        if year <= future_year_threshold {
            2000 + year
        } else {
            1900 + year
        }
    } else {
        // Threshold wrapped past 100. e.g. digits 95 -> threshold 25: years
        // in (25, 95] are 19xx, everything else (10, 98, ...) is 20xx.
        if year <= future_year_threshold || year > current_year_digits {
            2000 + year
        } else {
            1900 + year
        }
    }
}
