//! Built-in protocol records.
//!
//! | Record | Wire layout |
//! |--------|-------------|
//! | [`Commitment`] | `root` 32 bytes, `leaf_count` `u32` |
//! | [`ProofBundle`] | `version` `u16`, `circuit_id` 32 bytes, `commitment` [`Commitment`], `proof` blob, `aggregated_from` optional 32 bytes |
//! | [`GasRecord`] | `gas_used` `u64`, `gas_limit` `u64`, `base_fee` `u64`, `priority_fee` optional `u64`, `refunded` bool |
//! | [`RollupInput`] | `batch_index` `u64`, `prev_state_root` 32 bytes, `new_state_root` 32 bytes, `tx_count` `u32`, `gas` [`GasRecord`], `proof` [`ProofBundle`], `tx_data` blob |
//!
//! All integers are big-endian.

use crate::define_record;
use crate::field::{Blob, FixedBytes};
use crate::ingest::{join_path, Violation};

/// 32-byte digest.
pub type Digest = FixedBytes<32>;

define_record! {
    /// Merkle commitment to a set of leaves.
    pub struct Commitment as "commitment" where check = Commitment::check_leaves {
        pub root: Digest,
        pub leaf_count: u32,
    }
}

impl Commitment {
    fn check_leaves(&self, path: &str, violations: &mut Vec<Violation>) {
        if self.leaf_count == 0 {
            violations.push(Violation::constraint(
                join_path(path, "leaf_count"),
                "commitment must cover at least one leaf",
            ));
        }
    }
}

define_record! {
    /// Proof produced by a backend together with its commitment.
    pub struct ProofBundle as "proof_bundle" {
        pub version: u16,
        pub circuit_id: Digest,
        pub commitment: Commitment,
        /// Opaque proof bytes.
        pub proof: Blob,
        /// Digest of the bundle this one aggregates, if any.
        pub aggregated_from: Option<Digest>,
    }
}

define_record! {
    /// Gas accounting for one batch.
    pub struct GasRecord as "gas_record" where check = GasRecord::check_budget {
        pub gas_used: u64,
        pub gas_limit: u64,
        pub base_fee: u64,
        pub priority_fee: Option<u64>,
        pub refunded: bool,
    }
}

impl GasRecord {
    fn check_budget(&self, path: &str, violations: &mut Vec<Violation>) {
        if self.gas_used > self.gas_limit {
            violations.push(Violation::constraint(
                join_path(path, "gas_used"),
                format!("gas used {} exceeds limit {}", self.gas_used, self.gas_limit),
            ));
        }
    }
}

define_record! {
    /// Input handed to the rollup for one batch.
    pub struct RollupInput as "rollup_input" where check = RollupInput::check_transactions {
        pub batch_index: u64,
        pub prev_state_root: Digest,
        pub new_state_root: Digest,
        pub tx_count: u32,
        pub gas: GasRecord,
        pub proof: ProofBundle,
        /// Concatenated transaction payloads.
        pub tx_data: Blob,
    }
}

impl RollupInput {
    fn check_transactions(&self, path: &str, violations: &mut Vec<Violation>) {
        if self.tx_count > 0 && self.tx_data.is_empty() {
            violations.push(Violation::constraint(
                join_path(path, "tx_data"),
                format!("{} transactions declared but no payload", self.tx_count),
            ));
        }
    }
}
