//! Numeric conversion helpers

use sol_etl_common::RecordErrorKind;

/// Widens a narrow source integer to the record's 64-bit column type.
#[inline]
pub fn widen(value: u32) -> i64 {
    i64::from(value)
}

/// Parses the decimal token amount reported for token accounts.
///
/// A missing or empty string yields `Ok(None)`. Anything else must be a plain
/// base-10 `u64`: no whitespace and no sign.
pub fn parse_token_amount(raw: Option<&str>) -> Result<Option<u64>, RecordErrorKind> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) if raw.starts_with('+') => Err(RecordErrorKind::SignedInteger),
        Some(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(RecordErrorKind::InvalidInteger),
    }
}
