//! BN254 scalar field conversions and the Poseidon hash primitive.
//!
//! Every hash that feeds a circuit goes through [`poseidon`], which uses the
//! circomlib-compatible parameterisation (`t = arity + 1`, standard round
//! constants) rather than Poseidon2 — the in-circuit prover and this crate
//! must agree bit-for-bit or every witness built here is worthless.

use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

use ark_ff::PrimeField;
use eval_types::EvalError;
use light_poseidon::{Poseidon, PoseidonHasher};
use sha2::{Digest, Sha256};

/// The BN254 scalar field element type every commitment is expressed in.
pub type Field = ark_bn254::Fr;

const MAX_ARITY: usize = 5;

static POSEIDON_CACHE: [OnceLock<Mutex<Poseidon<Field>>>; MAX_ARITY] = [
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
    OnceLock::new(),
];

fn hasher_for_arity(arity: usize) -> Result<&'static Mutex<Poseidon<Field>>, EvalError> {
    if arity == 0 || arity > MAX_ARITY {
        return Err(EvalError::CircuitInputOutOfRange {
            message: format!("poseidon arity {arity} out of supported range 1..={MAX_ARITY}"),
        });
    }
    Ok(POSEIDON_CACHE[arity - 1].get_or_init(|| {
        Mutex::new(
            Poseidon::<Field>::new_circom(arity).expect("circomlib poseidon params for 1..=5"),
        )
    }))
}

/// Hashes `inputs` (1 to 5 field elements) with the circomlib-compatible
/// Poseidon permutation, returning the single output lane.
pub fn poseidon(inputs: &[Field]) -> Result<Field, EvalError> {
    let hasher = hasher_for_arity(inputs.len())?;
    let mut guard = hasher.lock().expect("poseidon cache mutex poisoned");
    guard.hash(inputs).map_err(|err| EvalError::CircuitInputOutOfRange {
        message: format!("poseidon hash failed: {err}"),
    })
}

/// Converts a `u64` to its field representation directly (no reduction
/// needed — every `u64` is already below the BN254 modulus).
#[must_use]
pub fn field_from_u64(value: u64) -> Field {
    Field::from(value)
}

/// Reduces a SHA-256 digest of `bytes` to a field element by truncating to
/// the first 31 bytes before the big-endian interpretation, guaranteeing the
/// value is below the modulus without introducing modular bias.
#[must_use]
pub fn sha256_field(bytes: &[u8]) -> Field {
    let digest = Sha256::digest(bytes);
    Field::from_be_bytes_mod_order(&digest[..31])
}

/// Converts a decimal string, a `0x`-prefixed hex string, or an arbitrary
/// string to a field element. Decimal and hex strings are interpreted as the
/// literal numeric value (reduced modulo the field order); any other string
/// is first SHA-256-hashed, then reduced via [`sha256_field`].
#[must_use]
pub fn field_from_str(s: &str) -> Field {
    if let Some(hex_digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if let Ok(bytes) = hex::decode(hex_digits) {
            return Field::from_be_bytes_mod_order(&bytes);
        }
    }
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(field) = Field::from_str(s) {
            return field;
        }
    }
    sha256_field(s.as_bytes())
}

/// Encodes a field element as a decimal string, the wire format required at
/// every boundary (never hex, never leading zeros).
#[must_use]
pub fn field_to_decimal(value: &Field) -> String {
    value.into_bigint().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poseidon_is_deterministic() {
        let a = field_from_u64(1);
        let b = field_from_u64(2);
        let h1 = poseidon(&[a, b]).expect("hash");
        let h2 = poseidon(&[a, b]).expect("hash");
        assert_eq!(h1, h2);
    }

    #[test]
    fn poseidon_distinguishes_order() {
        let a = field_from_u64(1);
        let b = field_from_u64(2);
        let h1 = poseidon(&[a, b]).expect("hash");
        let h2 = poseidon(&[b, a]).expect("hash");
        assert_ne!(h1, h2);
    }

    #[test]
    fn poseidon_rejects_bad_arity() {
        let zero_arity = poseidon(&[]);
        assert!(zero_arity.is_err());
        let six = vec![Field::from(0u64); 6];
        assert!(poseidon(&six).is_err());
    }

    #[test]
    fn sha256_field_is_below_modulus_and_deterministic() {
        let h1 = sha256_field(b"hello");
        let h2 = sha256_field(b"hello");
        assert_eq!(h1, h2);
        let h3 = sha256_field(b"hellp");
        assert_ne!(h1, h3);
    }

    #[test]
    fn field_from_str_handles_decimal_hex_and_text() {
        assert_eq!(field_from_str("42"), field_from_u64(42));
        assert_eq!(field_from_str("0x2a"), field_from_u64(42));
        // Non-numeric strings fall back to the sha256 path, not a decimal parse.
        assert_eq!(field_from_str("hello"), sha256_field(b"hello"));
    }

    #[test]
    fn field_to_decimal_has_no_leading_zero_or_prefix() {
        let encoded = field_to_decimal(&field_from_u64(7));
        assert_eq!(encoded, "7");
    }
}
