//! Loads the magic bitboard tables used at process start.
//!
//! A production build would deserialize a precomputed bincode blob shipped
//! with the binary; here the tables are regenerated by magic-number search,
//! which is deterministic under the `deterministic_magic` feature and
//! produces an equally valid (if differently keyed) perfect hash otherwise.

use crate::moves::magic::MagicTables;
use crate::moves::magic::precompute::{MagicTableSeed, generate_magic_tables};

#[cfg(feature = "deterministic_magic")]
const FIXED_SEED: u64 = 0x1F2E_3D4C_5B6A_7988;

pub fn load_magic_tables() -> MagicTables {
    #[cfg(feature = "deterministic_magic")]
    let seed = MagicTableSeed::Fixed(FIXED_SEED);
    #[cfg(not(feature = "deterministic_magic"))]
    let seed = MagicTableSeed::Random;

    generate_magic_tables(seed).expect("magic bitboard table generation must not fail")
}
