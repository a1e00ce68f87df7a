//! Bangladeshi phone normalization and the deliverability filter.
//!
//! Canonical form is `880` + operator prefix `1X` + 8 digits, 13 digits
//! total, e.g. `8801712345678`.

/// Canonicalize an arbitrary phone string toward national `880...` form.
///
/// Pure and total: unrecognized prefixes pass through unchanged and are left
/// for [`is_deliverable`] to reject.
pub fn normalize(raw: &str) -> String {
    let p = raw.trim();
    if p.is_empty() {
        return String::new();
    }
    let p = p.strip_prefix('+').unwrap_or(p);
    if p.starts_with("88") {
        p.to_string()
    } else if p.starts_with('0') {
        format!("88{p}")
    } else if p.starts_with('1') {
        format!("880{p}")
    } else {
        p.to_string()
    }
}

/// True iff the normalized number matches `8801[3-9]` + 8 digits.
pub fn is_deliverable(number: &str) -> bool {
    let b = number.as_bytes();
    b.len() == 13
        && b.starts_with(b"8801")
        && (b'3'..=b'9').contains(&b[4])
        && b.iter().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_input_is_unchanged() {
        assert_eq!(normalize("8801712345678"), "8801712345678");
        assert!(is_deliverable(&normalize("8801712345678")));
    }

    #[test]
    fn plus_prefix_is_stripped() {
        assert_eq!(normalize("+8801812345678"), "8801812345678");
        assert!(is_deliverable(&normalize("+8801812345678")));
    }

    #[test]
    fn local_zero_prefix_gains_country_code() {
        assert_eq!(normalize("01712345678"), "8801712345678");
        assert!(is_deliverable(&normalize("01712345678")));
    }

    #[test]
    fn bare_operator_prefix_gains_country_and_trunk() {
        assert_eq!(normalize("1712345678"), "8801712345678");
        assert!(is_deliverable(&normalize("1712345678")));
    }

    #[test]
    fn empty_and_whitespace_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert!(!is_deliverable(""));
    }

    #[test]
    fn unrecognized_prefix_passes_through_and_fails_filter() {
        assert_eq!(normalize("+4917112345678"), "4917112345678");
        assert!(!is_deliverable("4917112345678"));
    }

    #[test]
    fn non_mobile_operator_digit_fails_filter() {
        // second national digit 2 is outside [3-9]
        assert_eq!(normalize("880299999999"), "880299999999");
        assert!(!is_deliverable("880299999999"));
    }

    #[test]
    fn wrong_length_fails_filter() {
        assert!(!is_deliverable("88017123456"));
        assert!(!is_deliverable("880171234567890"));
    }

    #[test]
    fn non_digit_content_fails_filter() {
        assert!(!is_deliverable("88017abc45678"));
    }
}
