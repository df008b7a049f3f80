use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the attack can report. All of them are terminal for the
/// run; the oracle is assumed reliable, so there is no retryable class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Block-size probing found no stabilization point within its range.
    BlockSizeNotDetected,
    /// The mode detector could not establish ECB, so byte recovery must
    /// not be attempted.
    ModeMismatch,
    /// No candidate byte matched on the very first recovery step, which a
    /// well-formed ECB oracle never produces.
    MalformedOracle,
    /// The prober's sample prefix is shorter than the probe range.
    SampleTooShort { needed: usize, got: usize },
    /// A message failed PKCS#7 validation.
    InvalidPadding,
    /// The oracle's transport encoding could not be decoded.
    Transport(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BlockSizeNotDetected => {
                write!(f, "no block size stabilization observed within probe range")
            }
            Error::ModeMismatch => {
                write!(f, "oracle does not appear to use ECB; refusing byte recovery")
            }
            Error::MalformedOracle => {
                write!(f, "no candidate byte matched the target block; oracle is malformed")
            }
            Error::SampleTooShort { needed, got } => {
                write!(f, "sample prefix too short: need {needed} bytes, got {got}")
            }
            Error::InvalidPadding => write!(f, "invalid pkcs7 padding"),
            Error::Transport(msg) => write!(f, "transport decoding failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
