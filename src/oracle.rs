//! The black-box encryption service and the adapter the attack talks to.

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, BlockSizeUser};
use rand::Rng;

use crate::{encoding::Encoding, error::Result, padding::pkcs7_pad};

/// The attack's only view of the encryption service: attacker-chosen bytes
/// in, transport-decoded ciphertext bytes out. Implementations must be
/// deterministic functions of the input for the ECB attack to be sound.
pub trait Oracle {
    fn query(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// An ECB encryption service with a fixed key and a fixed secret suffix,
/// both unknown to the attack. Every call encrypts
/// `pkcs7_pad(input ++ secret)` and returns the ciphertext in the service's
/// transport encoding.
pub struct EcbOracle<C> {
    cipher: C,
    secret: Vec<u8>,
    encoding: Encoding,
}

impl<C: BlockEncrypt> EcbOracle<C> {
    pub fn new(cipher: C, secret: Vec<u8>, encoding: Encoding) -> Self {
        Self {
            cipher,
            secret,
            encoding,
        }
    }

    /// The service's wire interface: transport-encoded ciphertext.
    pub fn encrypt(&self, input: &[u8]) -> Vec<u8> {
        let message = [input, &self.secret].concat();
        let padded = pkcs7_pad(&message, C::block_size());
        self.encoding.encode(&ecb_encrypt(&self.cipher, &padded))
    }
}

impl<C: BlockEncrypt> Oracle for EcbOracle<C> {
    fn query(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.encoding.decode(&self.encrypt(input))
    }
}

/// A chained-mode counterpart to [`EcbOracle`]: CBC with a fresh random IV
/// on every call. Exists so the mode detector has something other than ECB
/// to be run against.
pub struct CbcOracle<C> {
    cipher: C,
    secret: Vec<u8>,
    encoding: Encoding,
}

impl<C: BlockEncrypt> CbcOracle<C> {
    pub fn new(cipher: C, secret: Vec<u8>, encoding: Encoding) -> Self {
        Self {
            cipher,
            secret,
            encoding,
        }
    }

    pub fn encrypt(&self, input: &[u8]) -> Vec<u8> {
        let message = [input, &self.secret].concat();
        let padded = pkcs7_pad(&message, C::block_size());

        let mut chain = vec![0u8; C::block_size()];
        rand::thread_rng().fill(chain.as_mut_slice());

        let mut ciphertext = Vec::with_capacity(padded.len());
        for block in padded.chunks(C::block_size()) {
            let mut buf = GenericArray::clone_from_slice(block);
            for (byte, prev) in buf.iter_mut().zip(&chain) {
                *byte ^= prev;
            }
            self.cipher.encrypt_block(&mut buf);
            chain = buf.to_vec();
            ciphertext.extend_from_slice(&buf);
        }
        self.encoding.encode(&ciphertext)
    }
}

impl<C: BlockEncrypt> Oracle for CbcOracle<C> {
    fn query(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.encoding.decode(&self.encrypt(input))
    }
}

fn ecb_encrypt<C: BlockEncrypt>(cipher: &C, padded: &[u8]) -> Vec<u8> {
    let mut ciphertext = Vec::with_capacity(padded.len());
    for block in padded.chunks(C::block_size()) {
        let mut buf = GenericArray::clone_from_slice(block);
        cipher.encrypt_block(&mut buf);
        ciphertext.extend_from_slice(&buf);
    }
    ciphertext
}
