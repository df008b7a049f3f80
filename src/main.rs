use aes::{cipher::KeyInit, Aes128};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use ecb_crack::{
    detect_mode, probe_block_size, recover_suffix, CipherMode, EcbOracle, Encoding, Error,
};

// Consistent but unknown to the attack: the service's key and the secret
// it appends to every message.
const KEY: [u8; 16] = [
    21, 200, 56, 242, 28, 153, 199, 148, 241, 165, 143, 49, 73, 54, 251, 42,
];
const SECRET_B64: &str = "Um9sbGluJyBpbiBteSA1LjAKV2l0aCBteSByYWctdG9wIGRvd24gc28gbXkgaGFpciBjYW4g\
YmxvdwpUaGUgZ2lybGllcyBvbiBzdGFuZGJ5IHdhdmluZyBqdXN0IHRvIHNheSBoaQpEaWQg\
eW91IHN0b3A/IE5vLCBJIGp1c3QgZHJvdmUgYnkK";

const SAMPLE: &[u8] = b"The quick brown fox jumps over the lazy dog, twice around the block.";

fn main() {
    match run() {
        Ok(secret) => println!("Secret message:\n\n{secret}"),
        Err(err) => {
            eprintln!("attack failed: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<String, Error> {
    let secret = STANDARD
        .decode(SECRET_B64)
        .map_err(|err| Error::Transport(err.to_string()))?;
    let oracle = EcbOracle::new(Aes128::new(&KEY.into()), secret, Encoding::Base64);

    let block_size = probe_block_size(&oracle, SAMPLE)?;
    println!("block size: {block_size}");

    let mode = detect_mode(&oracle)?;
    println!("mode: {mode}");
    if mode != CipherMode::Ecb {
        return Err(Error::ModeMismatch);
    }

    let recovered = recover_suffix(&oracle, block_size)?;
    Ok(String::from_utf8_lossy(&recovered).into_owned())
}
