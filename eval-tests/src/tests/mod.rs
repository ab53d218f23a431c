mod utils;

mod scenario_determinism;
mod scenario_placeholder_rejection;
mod scenario_reconciliation;
