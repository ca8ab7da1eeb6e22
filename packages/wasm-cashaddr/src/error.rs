use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CashAddrError {
    /// A character outside the cashaddr alphabet or the prefix charset, or a mixed-case address
    InvalidCharacter(char),
    /// Too few symbols, a dangling input group, or a hash that disagrees with its size class
    InvalidLength(String),
    ChecksumMismatch,
    /// Non-zero padding bits after the last whole byte
    InvalidPadding,
    /// Bit repacker input that does not fit the source width
    InvalidSymbol(u8),
    UnsupportedSize(usize),
    InvalidType(u8),
    UnknownAddressType(String),
    MissingPrefix,
    PrefixMismatch {
        expected: String,
        found: String,
    },
    UnknownNetwork(String),
    InvalidScript(String),
}

impl fmt::Display for CashAddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CashAddrError::InvalidCharacter(c) => write!(f, "Invalid character: {:?}", c),
            CashAddrError::InvalidLength(msg) => write!(f, "Invalid length: {}", msg),
            CashAddrError::ChecksumMismatch => write!(f, "Invalid checksum"),
            CashAddrError::InvalidPadding => write!(f, "Non-zero padding bits"),
            CashAddrError::InvalidSymbol(v) => write!(f, "Value out of range: {}", v),
            CashAddrError::UnsupportedSize(len) => {
                write!(f, "Unsupported hash size: {} bytes", len)
            }
            CashAddrError::InvalidType(t) => write!(f, "Invalid address type: {}", t),
            CashAddrError::UnknownAddressType(name) => {
                write!(f, "Unknown address type: {}", name)
            }
            CashAddrError::MissingPrefix => write!(f, "Missing prefix"),
            CashAddrError::PrefixMismatch { expected, found } => {
                write!(f, "Prefix mismatch: expected {}, got {}", expected, found)
            }
            CashAddrError::UnknownNetwork(name) => write!(f, "Unknown network: {}", name),
            CashAddrError::InvalidScript(msg) => write!(f, "Invalid script: {}", msg),
        }
    }
}

impl std::error::Error for CashAddrError {}

pub type Result<T> = std::result::Result<T, CashAddrError>;
