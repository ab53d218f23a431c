//! Builds the private+public witness structures the two circuits consume,
//! enforcing the zero-pad padding rule and the integer-sum score
//! reconciliation policy.

mod methodology;
mod reconcile;
mod witness;

pub use methodology::MethodologyFields;
pub use reconcile::reconcile_scores;
pub use witness::{
    assemble_full_witness, assemble_subset_witness, FullWitness, FullWitnessInputs, SubsetWitness,
};
