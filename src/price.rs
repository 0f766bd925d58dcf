use std::sync::OnceLock;

use regex::Regex;

use crate::constants::listing::PRICE_UNKNOWN;
use crate::types::PriceText;

/// Dollar figure: `$` followed by digits with optional thousands commas.
const PRICE_PATTERN: &str = r"\$[0-9,]+";

fn price_regex() -> &'static Regex {
    static PRICE_REGEX: OnceLock<Regex> = OnceLock::new();
    PRICE_REGEX.get_or_init(|| Regex::new(PRICE_PATTERN).expect("price pattern is valid"))
}

/// Extract the largest dollar amount quoted in `text`.
///
/// Each `$`-prefixed figure is read with the `$` and thousands commas
/// stripped, and the maximum parseable value comes back as a plain decimal
/// string. Returns `?` when nothing matches or every match is zero or
/// unparseable. Listings often quote several figures (previous price, add-on
/// costs); the asking price is taken to be the largest.
pub fn extract_max_price(text: &str) -> PriceText {
    let mut max_price: u64 = 0;
    for found in price_regex().find_iter(text) {
        let digits: String = found
            .as_str()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if let Ok(value) = digits.parse::<u64>()
            && value > max_price
        {
            max_price = value;
        }
    }
    if max_price == 0 {
        PRICE_UNKNOWN.to_string()
    } else {
        max_price.to_string()
    }
}
