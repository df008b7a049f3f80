mod detect;
mod encoding;
mod error;
mod oracle;
mod padding;
mod probe;
mod recover;

pub use detect::{detect_mode, CipherMode};
pub use encoding::Encoding;
pub use error::{Error, Result};
pub use oracle::{CbcOracle, EcbOracle, Oracle};
pub use padding::{pkcs7_pad, pkcs7_unpad};
pub use probe::{probe_block_size, MAX_BLOCK_SIZE};
pub use recover::recover_suffix;
