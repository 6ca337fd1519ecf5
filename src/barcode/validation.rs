use regex::Regex;
use std::sync::LazyLock;

use crate::error::{AnalystError, Result};

/// Shortest accepted code (EAN-8 / UPC-E expanded).
pub const MIN_BARCODE_LEN: usize = 8;

/// Longest accepted code (EAN-13 / ISBN-13).
pub const MAX_BARCODE_LEN: usize = 13;

static BARCODE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{8,13}").expect("valid barcode run regex"));

/// Check that a manually entered or decoded code is 8-13 ASCII digits.
///
/// Surrounding whitespace is ignored; the trimmed code is returned.
pub fn validate_barcode(input: &str) -> Result<String> {
    let code = input.trim();
    let digits_only = !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit());
    if digits_only && (MIN_BARCODE_LEN..=MAX_BARCODE_LEN).contains(&code.len()) {
        Ok(code.to_string())
    } else {
        Err(AnalystError::InvalidFormat(code.to_string()))
    }
}

/// Pull the most likely barcode out of noisy OCR text.
///
/// Non-digits are dropped first, so a code split by spaces or dashes is
/// rejoined. Returns the longest 8-13 digit run (first one on ties).
pub fn extract_barcode_digits(text: &str) -> Option<String> {
    let cleaned: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    BARCODE_RUN_RE
        .find_iter(&cleaned)
        .map(|m| m.as_str())
        .fold(None::<&str>, |best, run| match best {
            Some(b) if b.len() >= run.len() => Some(b),
            _ => Some(run),
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_common_lengths() {
        assert_eq!(validate_barcode("73762806").unwrap(), "73762806");
        assert_eq!(validate_barcode("737628064502").unwrap(), "737628064502");
        assert_eq!(validate_barcode(" 5449000000996\n").unwrap(), "5449000000996");
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        for bad in ["", "1234567", "12345678901234", "12345abc", "1234 5678", "١٢٣٤٥٦٧٨"] {
            assert!(
                matches!(validate_barcode(bad), Err(AnalystError::InvalidFormat(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_extract_rejoins_split_digits() {
        assert_eq!(
            extract_barcode_digits("5 449000 000996").as_deref(),
            Some("5449000000996")
        );
    }

    #[test]
    fn test_extract_none_for_short_text() {
        assert_eq!(extract_barcode_digits("abc 1234 x"), None);
        assert_eq!(extract_barcode_digits(""), None);
    }

    #[test]
    fn test_extract_caps_at_thirteen_digits() {
        // 20 digits split into a 13 and a 7 digit run; only the first qualifies.
        let text = "12345678901234567890";
        assert_eq!(extract_barcode_digits(text).as_deref(), Some("1234567890123"));
    }
}
