//! PKCS#7 padding, applied by the encryption service before it encrypts.

use crate::error::{Error, Result};

pub fn pkcs7_pad(bytes: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!(block_size > 0 && block_size < 256);
    let n_pad = block_size - (bytes.len() % block_size);
    let mut out = Vec::with_capacity(bytes.len() + n_pad);
    out.extend_from_slice(bytes);
    out.extend(std::iter::repeat(n_pad as u8).take(n_pad));
    out
}

pub fn pkcs7_unpad(bytes: &mut Vec<u8>) -> Result<()> {
    match n_padding_bytes(bytes) {
        Some(n_pad) => {
            bytes.truncate(bytes.len() - n_pad);
            Ok(())
        }
        None => Err(Error::InvalidPadding),
    }
}

fn n_padding_bytes(bytes: &[u8]) -> Option<usize> {
    let &last = bytes.last()?;
    let n_pad = last as usize;
    if n_pad == 0 || n_pad > bytes.len() {
        return None;
    }
    bytes[bytes.len() - n_pad..]
        .iter()
        .all(|&byte| byte == last)
        .then_some(n_pad)
}
