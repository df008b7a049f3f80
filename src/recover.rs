//! Byte-at-a-time recovery of the oracle's secret suffix.

use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    oracle::Oracle,
};

const FILLER_BYTE: u8 = b'A';

/// Recover the oracle's entire secret suffix without ever learning the key.
///
/// One unified sliding-window loop drives the whole attack. With `N` bytes
/// already confirmed, a filler of `B - 1 - (N % B)` bytes aligns the next
/// unknown byte to the last position of the block at offset
/// `(N / B) * B`. Every byte of that block except the last is then known
/// (filler for the first block, recovered bytes afterwards), so an
/// exhaustive 256-candidate codebook pins down the unknown byte.
///
/// Recovery ends when no candidate matches: the window has slid into the
/// padding region, whose bytes change with the query length and so cannot
/// be reproduced. A correct deterministic oracle admits at most one match
/// per step; in the (practically impossible) event of several, the lowest
/// candidate value wins, for determinism.
pub fn recover_suffix<O: Oracle + Sync>(oracle: &O, block_size: usize) -> Result<Vec<u8>> {
    let mut recovered: Vec<u8> = Vec::new();
    loop {
        match recover_next_byte(oracle, block_size, &recovered)? {
            Some(byte) => recovered.push(byte),
            // A padding-aligned query always ends in a single 0x01 pad
            // byte, so the very first step must match; if it does not, the
            // oracle is not the deterministic ECB service we assumed.
            None if recovered.is_empty() => return Err(Error::MalformedOracle),
            None => break,
        }
    }
    // The step at the secret's boundary reads that lone 0x01 pad byte
    // before the next step fails; it is not part of the secret.
    if recovered.last() == Some(&0x01) {
        recovered.pop();
    }
    Ok(recovered)
}

fn recover_next_byte<O: Oracle + Sync>(
    oracle: &O,
    block_size: usize,
    recovered: &[u8],
) -> Result<Option<u8>> {
    let filler = vec![FILLER_BYTE; block_size - 1 - (recovered.len() % block_size)];
    let window = (recovered.len() / block_size) * block_size;

    let target = window_block(&oracle.query(&filler)?, window, block_size)?;

    // The 256 codebook queries are independent of each other, so they run
    // data-parallel; collection keeps ascending candidate order.
    let codebook = (0..=u8::MAX)
        .into_par_iter()
        .map(|candidate| {
            let probe = [filler.as_slice(), recovered, &[candidate]].concat();
            let block = window_block(&oracle.query(&probe)?, window, block_size)?;
            Ok((candidate, block))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(codebook
        .into_iter()
        .find(|(_, block)| *block == target)
        .map(|(candidate, _)| candidate))
}

fn window_block(ciphertext: &[u8], offset: usize, block_size: usize) -> Result<Vec<u8>> {
    ciphertext
        .get(offset..offset + block_size)
        .map(<[u8]>::to_vec)
        .ok_or(Error::MalformedOracle)
}
