//! Parsing rules for numeric operator input.

use super::errors::DomainError;

/// True when `s` is made only of ASCII digits and its value is above zero.
pub fn is_positive_int(s: &str) -> bool {
    parse_positive_int(s).is_ok()
}

/// Parses a price or quantity field.
///
/// Signs, decimal points, whitespace and anything that does not fit in a
/// `u64` are rejected.
pub fn parse_positive_int(s: &str) -> Result<u64, DomainError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvalidNumber(s.to_string()));
    }
    match s.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DomainError::InvalidNumber(s.to_string())),
    }
}

/// Parses a 1-based selection against a list of `len` entries and returns
/// the 0-based position.
pub fn parse_selection(s: &str, len: usize) -> Result<usize, DomainError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvalidNumber(s.to_string()));
    }
    // All-digit input too large for usize is necessarily out of range.
    let index = s.parse::<usize>().unwrap_or(usize::MAX);
    if index == 0 || index > len {
        return Err(DomainError::IndexOutOfRange { index, len });
    }
    Ok(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_positive_numbers() {
        assert!(is_positive_int("1"));
        assert!(is_positive_int("50"));
        assert!(is_positive_int("007"));
    }

    #[test]
    fn rejects_zero_and_empty() {
        assert!(!is_positive_int(""));
        assert!(!is_positive_int("0"));
        assert!(!is_positive_int("000"));
    }

    #[test]
    fn rejects_signs_decimals_and_letters() {
        for s in ["-5", "+5", "1.5", "1e3", "abc", "12a", " 5", "5 "] {
            assert!(!is_positive_int(s), "{s:?} should be rejected");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Fullwidth digits
        assert!(!is_positive_int("１２"));
    }

    #[test]
    fn rejects_values_beyond_u64() {
        assert!(!is_positive_int("99999999999999999999999"));
    }

    #[test]
    fn parse_returns_value() {
        assert_eq!(parse_positive_int("1200").expect("valid"), 1200);
    }

    #[test]
    fn selection_is_converted_to_zero_based() {
        assert_eq!(parse_selection("1", 3).expect("valid"), 0);
        assert_eq!(parse_selection("3", 3).expect("valid"), 2);
    }

    #[test]
    fn selection_rejects_non_numeric() {
        assert!(matches!(
            parse_selection("x", 3),
            Err(DomainError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_selection("-1", 3),
            Err(DomainError::InvalidNumber(_))
        ));
    }

    #[test]
    fn selection_rejects_out_of_range() {
        assert!(matches!(
            parse_selection("0", 3),
            Err(DomainError::IndexOutOfRange { index: 0, len: 3 })
        ));
        assert!(matches!(
            parse_selection("4", 3),
            Err(DomainError::IndexOutOfRange { index: 4, len: 3 })
        ));
        assert!(matches!(
            parse_selection("99999999999999999999999", 3),
            Err(DomainError::IndexOutOfRange { .. })
        ));
    }
}
