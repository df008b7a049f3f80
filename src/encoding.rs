//! Transport encoding applied to oracle output before it reaches the attack.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{Error, Result};

/// How the encryption service encodes its ciphertext on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Raw,
    Base64,
    Hex,
}

impl Encoding {
    pub fn encode(&self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Encoding::Raw => bytes.to_vec(),
            Encoding::Base64 => STANDARD.encode(bytes).into_bytes(),
            Encoding::Hex => hex::encode(bytes).into_bytes(),
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        match self {
            Encoding::Raw => Ok(bytes.to_vec()),
            Encoding::Base64 => STANDARD
                .decode(bytes)
                .map_err(|err| Error::Transport(err.to_string())),
            Encoding::Hex => hex::decode(bytes).map_err(|err| Error::Transport(err.to_string())),
        }
    }
}
