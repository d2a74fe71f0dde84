use crate::error::ClientInputError;

/// Parse a single path parameter as a signed 64-bit integer.
///
/// Accepts an optional leading `-` followed by ASCII digits and nothing
/// else: no `+`, whitespace, or decimal point. Values outside `i64` fail.
pub fn parse_int_param(name: &str, raw: &str) -> Result<i64, ClientInputError> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    let well_formed = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());

    well_formed
        .then(|| raw.parse::<i64>().ok())
        .flatten()
        .ok_or_else(|| ClientInputError {
            name: name.to_string(),
            value: raw.to_string(),
        })
}
