//! Discovers the cipher's block size from ciphertext prefixes alone.

use crate::{
    error::{Error, Result},
    oracle::Oracle,
};

/// Largest block size the prober considers, chosen generously above
/// anything a real block cipher uses.
pub const MAX_BLOCK_SIZE: usize = 32;

/// Number of sample-prefix lengths queried. Candidates are judged against
/// every longer query, so the probe runs to twice the largest candidate to
/// give the top candidates observations to stabilize against.
const PROBE_RANGE: usize = 2 * MAX_BLOCK_SIZE;

/// Query the oracle with growing prefixes of `sample` and find the point
/// where the leading ciphertext bytes stop changing.
///
/// Once the attacker-controlled prefix fills a whole block, longer prefixes
/// only start new blocks and no longer perturb the first block's
/// ciphertext. The smallest prefix length whose leading bytes match every
/// longer query's is therefore the block size.
pub fn probe_block_size<O: Oracle>(oracle: &O, sample: &[u8]) -> Result<usize> {
    if sample.len() < PROBE_RANGE {
        return Err(Error::SampleTooShort {
            needed: PROBE_RANGE,
            got: sample.len(),
        });
    }

    let outputs = (1..=PROBE_RANGE)
        .map(|len| oracle.query(&sample[..len]))
        .collect::<Result<Vec<_>>>()?;

    for candidate in 1..=MAX_BLOCK_SIZE {
        let reference = &outputs[candidate - 1][..candidate];
        if outputs[candidate..]
            .iter()
            .all(|output| &output[..candidate] == reference)
        {
            return Ok(candidate);
        }
    }
    Err(Error::BlockSizeNotDetected)
}

#[cfg(test)]
mod tests {
    use super::*;

    use aes::{cipher::KeyInit, Aes128};
    use des::Des;
    use rstest::rstest;
    use threefish::Threefish256;

    use crate::{EcbOracle, Encoding};

    const SAMPLE: &[u8] =
        b"The quick brown fox jumps over the lazy dog, twice around the block.";

    #[rstest]
    #[case(b"".to_vec())]
    #[case(b"short".to_vec())]
    #[case(vec![0x55; 200])]
    fn finds_aes_block_size_for_any_secret_length(#[case] secret: Vec<u8>) {
        let oracle = EcbOracle::new(Aes128::new(&[0x01; 16].into()), secret, Encoding::Base64);

        assert_eq!(probe_block_size(&oracle, SAMPLE).unwrap(), 16);
    }

    #[test]
    fn finds_des_block_size() {
        let oracle = EcbOracle::new(
            Des::new(&[0x01; 8].into()),
            b"secret".to_vec(),
            Encoding::Raw,
        );

        assert_eq!(probe_block_size(&oracle, SAMPLE).unwrap(), 8);
    }

    #[test]
    fn finds_threefish_block_size() {
        let oracle = EcbOracle::new(
            Threefish256::new(&[0x01; 32].into()),
            b"secret".to_vec(),
            Encoding::Raw,
        );

        assert_eq!(probe_block_size(&oracle, SAMPLE).unwrap(), 32);
    }

    #[test]
    fn rejects_short_sample() {
        let oracle = EcbOracle::new(
            Aes128::new(&[0x01; 16].into()),
            b"secret".to_vec(),
            Encoding::Raw,
        );

        let result = probe_block_size(&oracle, b"way too short");

        assert_eq!(
            result,
            Err(Error::SampleTooShort {
                needed: 64,
                got: 13
            })
        );
    }

    #[test]
    fn reports_failure_for_non_deterministic_oracle() {
        struct NoiseOracle;

        impl Oracle for NoiseOracle {
            fn query(&self, input: &[u8]) -> Result<Vec<u8>> {
                use rand::RngCore;
                let mut bytes = vec![0u8; input.len() + 64];
                rand::thread_rng().fill_bytes(&mut bytes);
                Ok(bytes)
            }
        }

        let result = probe_block_size(&NoiseOracle, SAMPLE);

        assert_eq!(result, Err(Error::BlockSizeNotDetected));
    }
}
