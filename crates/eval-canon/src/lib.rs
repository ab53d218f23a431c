//! Deterministic serialisation for anything that feeds a SHA-256 commitment.
//!
//! Two values with the same abstract content must produce identical bytes on
//! any platform: object keys sorted, no whitespace, no exponent notation
//! unless required, arrays preserve order. `serde_json::Value`'s `Object`
//! variant is `BTreeMap`-backed in this workspace (the `preserve_order`
//! feature is never enabled), so routing every value through
//! [`serde_json::to_value`] before serialising normalises key order even for
//! inputs whose own `Serialize` impl would otherwise iterate a `HashMap` in
//! unspecified order.

use serde::Serialize;

/// Encodes `value` as canonical, whitespace-free, key-sorted JSON bytes.
///
/// # Panics
///
/// Panics if `value`'s `Serialize` implementation fails, which does not
/// happen for the plain data types this workspace hashes (no floats that are
/// NaN/infinite, no non-string map keys).
#[must_use]
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    let normalised = serde_json::to_value(value).expect("value is serialisable to JSON");
    serde_json::to_vec(&normalised).expect("a serde_json::Value always serialises")
}
