//! Verifies a [`ProofBundle`]: deserialises both Groth16 proofs, checks them
//! against their respective verifying keys with the normative public-signal
//! ordering, and cross-checks the consistency the two proofs must maintain
//! with each other (shared methodology outputs, subset root/score pinning,
//! disclosed-index count).
//!
//! The Groth16 check itself follows the standalone `verify_proof` pattern
//! familiar from wasm-targeted provers, adapted here from a byte-blob wire
//! format to this workspace's decimal-string field encoding.

use std::path::Path;
use std::str::FromStr;

use ark_bn254::{Bn254, Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_groth16::{Groth16, PreparedVerifyingKey, Proof, VerifyingKey};
use ark_serialize::CanonicalDeserialize;
use ark_snark::SNARK;
use eval_field::field_from_u64;
use eval_types::{EvalError, Groth16ProofWire, ProofBundle};

fn parse_fq(s: &str) -> Result<Fq, String> {
    Fq::from_str(s).map_err(|_| format!("malformed base-field coordinate: {s}"))
}

fn parse_fr(s: &str) -> Result<Fr, String> {
    Fr::from_str(s).map_err(|_| format!("malformed scalar-field public input: {s}"))
}

fn decode_g1(coords: &[String; 2]) -> Result<G1Affine, String> {
    let x = parse_fq(&coords[0])?;
    let y = parse_fq(&coords[1])?;
    let point = G1Affine::new_unchecked(x, y);
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err("G1 proof coordinate is not a valid curve point".to_string());
    }
    Ok(point)
}

fn decode_g2(coords: &[[String; 2]; 2]) -> Result<G2Affine, String> {
    let x = Fq2::new(parse_fq(&coords[0][0])?, parse_fq(&coords[0][1])?);
    let y = Fq2::new(parse_fq(&coords[1][0])?, parse_fq(&coords[1][1])?);
    let point = G2Affine::new_unchecked(x, y);
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err("G2 proof coordinate is not a valid curve point".to_string());
    }
    Ok(point)
}

fn decode_proof(wire: &Groth16ProofWire) -> Result<Proof<Bn254>, String> {
    Ok(Proof {
        a: decode_g1(&wire.a)?,
        b: decode_g2(&wire.b)?,
        c: decode_g1(&wire.c)?,
    })
}

fn parse_decimal_u64(field: &str, label: &str) -> Result<u64, String> {
    field.parse::<u64>().map_err(|_| format!("{label} is not a decimal integer: {field}"))
}

/// Loads a Groth16 verifying key from its canonical-serialised bytes on
/// disk and preprocesses it for repeated verification calls.
fn load_pvk(path: &Path) -> Result<PreparedVerifyingKey<Bn254>, EvalError> {
    let bytes = std::fs::read(path).map_err(|_| EvalError::ProverArtefactMissing {
        path: path.display().to_string(),
    })?;
    let vk = VerifyingKey::<Bn254>::deserialize_compressed(&bytes[..]).map_err(|err| {
        EvalError::ProverArtefactMissing {
            path: format!("{}: malformed verifying key ({err})", path.display()),
        }
    })?;
    <Groth16<Bn254> as SNARK<Fr>>::process_vk(&vk).map_err(|err| EvalError::VerificationFailure {
        reasons: vec![format!("failed to preprocess verifying key: {err}")],
    })
}

/// Verifies proof bundles against a fixed pair of verifying keys, one per
/// circuit.
pub struct BundleVerifier {
    subset_pvk: PreparedVerifyingKey<Bn254>,
    full_pvk: PreparedVerifyingKey<Bn254>,
}

impl BundleVerifier {
    /// Loads both verifying keys from disk.
    pub fn load(subset_vk_path: &Path, full_vk_path: &Path) -> Result<Self, EvalError> {
        Ok(BundleVerifier {
            subset_pvk: load_pvk(subset_vk_path)?,
            full_pvk: load_pvk(full_vk_path)?,
        })
    }

    /// Verifies `bundle` end to end: structural consistency, then both
    /// Groth16 proofs against their public signal vectors. Never errors on
    /// an invalid bundle — an invalid or placeholder bundle is a normal
    /// outcome, reported as `(false, reasons)`, collecting every failure
    /// reason rather than stopping at the first.
    #[must_use]
    pub fn verify(&self, bundle: &ProofBundle) -> (bool, Vec<String>) {
        if bundle.is_placeholder {
            return (false, vec!["placeholder proof".to_string()]);
        }

        let mut reasons = Vec::new();

        if bundle.public_indices.len() != bundle.aggregates.k {
            reasons.push(format!(
                "disclosed index count {} does not match aggregates.k {}",
                bundle.public_indices.len(),
                bundle.aggregates.k
            ));
        }

        match self.subset_public_inputs(bundle) {
            Ok(subset_public_inputs) => match decode_proof(&bundle.subset_proof) {
                Ok(proof) => match <Groth16<Bn254> as SNARK<Fr>>::verify_with_processed_vk(
                    &self.subset_pvk,
                    &subset_public_inputs,
                    &proof,
                ) {
                    Ok(true) => {}
                    Ok(false) => reasons.push("subset proof failed Groth16 verification".to_string()),
                    Err(err) => reasons.push(format!("subset proof verification errored: {err}")),
                },
                Err(reason) => reasons.push(reason),
            },
            Err(reason) => reasons.push(reason),
        }

        match self.full_public_inputs(bundle) {
            Ok(full_public_inputs) => match decode_proof(&bundle.full_proof) {
                Ok(proof) => match <Groth16<Bn254> as SNARK<Fr>>::verify_with_processed_vk(
                    &self.full_pvk,
                    &full_public_inputs,
                    &proof,
                ) {
                    Ok(true) => {}
                    Ok(false) => reasons.push("full proof failed Groth16 verification".to_string()),
                    Err(err) => reasons.push(format!("full proof verification errored: {err}")),
                },
                Err(reason) => reasons.push(reason),
            },
            Err(reason) => reasons.push(reason),
        }

        (reasons.is_empty(), reasons)
    }

    fn subset_public_inputs(&self, bundle: &ProofBundle) -> Result<Vec<Fr>, String> {
        let claimed_score = parse_decimal_u64(&bundle.aggregates.subset_sum, "aggregates.subsetSum")?;
        Ok(vec![
            field_from_u64(claimed_score),
            field_from_u64(u64::try_from(bundle.aggregates.k).unwrap_or(u64::MAX)),
            parse_fr(&bundle.commitments.subset_root)?,
            parse_fr(&bundle.commitments.logs_commitment)?,
            parse_fr(&bundle.commitments.library_version)?,
            parse_fr(&bundle.commitments.scoring_method)?,
        ])
    }

    fn full_public_inputs(&self, bundle: &ProofBundle) -> Result<Vec<Fr>, String> {
        let full_claimed_score = parse_decimal_u64(&bundle.aggregates.full_sum, "aggregates.fullSum")?;
        let subset_claimed_score = parse_decimal_u64(&bundle.aggregates.subset_sum, "aggregates.subsetSum")?;
        Ok(vec![
            parse_fr(&bundle.commitments.full_root)?,
            field_from_u64(full_claimed_score),
            field_from_u64(u64::try_from(bundle.aggregates.n).unwrap_or(u64::MAX)),
            parse_fr(&bundle.commitments.subset_root)?,
            field_from_u64(subset_claimed_score),
            field_from_u64(u64::try_from(bundle.aggregates.k).unwrap_or(u64::MAX)),
            parse_fr(&bundle.commitments.logs_commitment)?,
            parse_fr(&bundle.commitments.library_version)?,
            parse_fr(&bundle.commitments.scoring_method)?,
        ])
    }
}
