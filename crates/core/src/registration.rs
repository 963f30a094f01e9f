//! Registration-number policy for trademark records.
//!
//! Every record carries a human-readable code of the form `MR-{n}`. The
//! next code is derived from the code of the most recently inserted record
//! (highest id), not from a dedicated counter:
//!
//! - no prior record: `n = 1`
//! - prior code parses as `<prefix>-<n>`: `n + 1`
//! - prior code is malformed: the sequence resets to `n = 1`
//!
//! A malformed prior code resets the sequence; it never continues from the
//! highest number seen elsewhere in the table.

/// Prefix of every registration number.
pub const REGISTRATION_PREFIX: &str = "MR";

/// Separator between the prefix and the numeric suffix.
pub const REGISTRATION_SEPARATOR: char = '-';

/// Derive the next numeric suffix from the latest known registration number.
///
/// Only the second `-`-separated segment is inspected; the prefix itself is
/// not checked. Surrounding whitespace in the suffix is tolerated. Anything
/// that does not yield an integer (including an `n + 1` overflow) resets
/// the sequence to `1`.
///
/// # Examples
///
/// ```
/// use marcas_core::registration::derive_next_number;
///
/// assert_eq!(derive_next_number(None), 1);
/// assert_eq!(derive_next_number(Some("MR-5")), 6);
/// assert_eq!(derive_next_number(Some("BADVALUE")), 1);
/// ```
pub fn derive_next_number(last: Option<&str>) -> u64 {
    last.and_then(|code| code.split(REGISTRATION_SEPARATOR).nth(1))
        .and_then(|suffix| suffix.trim().parse::<u64>().ok())
        .and_then(|n| n.checked_add(1))
        .unwrap_or(1)
}

/// Render a numeric suffix as a full registration number (`MR-{n}`).
pub fn format_registration_number(n: u64) -> String {
    format!("{REGISTRATION_PREFIX}{REGISTRATION_SEPARATOR}{n}")
}

/// Compute the registration number for a new record given the latest one.
pub fn next_registration_number(last: Option<&str>) -> String {
    format_registration_number(derive_next_number(last))
}

/// Whether `code` is a well-formed `MR-{n}` value with a positive `n`.
///
/// Used for diagnostics only; derivation itself is deliberately lenient.
pub fn is_well_formed(code: &str) -> bool {
    code.strip_prefix(REGISTRATION_PREFIX)
        .and_then(|rest| rest.strip_prefix(REGISTRATION_SEPARATOR))
        .is_some_and(|digits| {
            !digits.is_empty()
                && digits.bytes().all(|b| b.is_ascii_digit())
                && digits.parse::<u64>().is_ok_and(|n| n > 0)
        })
}
