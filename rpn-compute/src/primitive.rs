//! Functions to construct [`BigInt`]s from integer literals.

use num_bigint::BigInt;

/// Parses a [`BigInt`] from decimal text, with an optional leading `-`. Returns [`None`] if the
/// text is not a decimal integer.
pub fn int_from_str(s: &str) -> Option<BigInt> {
    BigInt::parse_bytes(s.as_bytes(), 10)
}
