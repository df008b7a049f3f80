//! Distinguishes ECB from chained modes using only oracle outputs.

use std::collections::HashSet;
use std::fmt::Display;

use rand::Rng;

use crate::{error::Result, oracle::Oracle, probe::MAX_BLOCK_SIZE};

/// Width the ciphertext is partitioned at when counting duplicates. A true
/// block size below this still repeats whole 16-byte chunks, and a larger
/// one repeats across its 16-byte halves, so one fixed width covers the
/// plausible range.
const DETECTION_WIDTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    Ecb,
    /// Some state-chaining mode. The test only proves or disproves ECB; it
    /// does not tell CBC apart from any other non-ECB mode.
    Chained,
}

impl Display for CipherMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CipherMode::Ecb => write!(f, "ECB"),
            CipherMode::Chained => write!(f, "not ECB"),
        }
    }
}

/// Submit three maximum-width blocks of one repeated byte and look for
/// duplicate ciphertext blocks. ECB encrypts equal plaintext blocks to
/// equal ciphertext blocks; a chained mode only collides with probability
/// around 2^-128 per pair. Probabilistic evidence, not a proof.
pub fn detect_mode<O: Oracle>(oracle: &O) -> Result<CipherMode> {
    // Which byte repeats does not matter, only that it repeats.
    let filler = rand::thread_rng().gen_range(1..=127u8);
    let ciphertext = oracle.query(&[filler].repeat(3 * MAX_BLOCK_SIZE))?;
    if has_repeated_block(&ciphertext) {
        Ok(CipherMode::Ecb)
    } else {
        Ok(CipherMode::Chained)
    }
}

fn has_repeated_block(bytes: &[u8]) -> bool {
    let mut seen_blocks = HashSet::new();
    bytes
        .chunks_exact(DETECTION_WIDTH)
        .any(|block| !seen_blocks.insert(block))
}
