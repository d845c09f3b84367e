//! One module per argument in the tower, bottom layer first. Each follows
//! the teacher's `mod.rs` (types) / `prover.rs` (prove) / `proof.rs` (the
//! proof struct and its `verify`) split.

pub mod zero_argument;
pub mod hadamard_argument;
pub mod single_value_product_argument;
pub mod product_argument;
pub mod multi_exponentiation_argument;
pub mod shuffle_argument;
