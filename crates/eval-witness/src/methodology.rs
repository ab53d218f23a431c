//! The three methodology hashes, as field elements, ready to embed directly
//! into a witness. Computing them is `eval-methodology`'s job; this crate
//! only consumes the result.

use eval_field::Field;

/// The private methodology inputs shared by both circuits.
#[derive(Debug, Clone, Copy)]
pub struct MethodologyFields {
    /// `sha256_field` of the sanitised execution transcript.
    pub execution_logs_hash: Field,
    /// `sha256_field` of the library-code manifest.
    pub library_code_hash: Field,
    /// `sha256_field` of the per-test scoring descriptors.
    pub scoring_method_hash: Field,
}
