//! Version byte handling and 8-bit/5-bit packing of the cashaddr payload.
//!
//! The version byte carries the address type in bits 3-5 and the hash size class
//! in bits 0-2:
//!
//! | size class | hash bytes |
//! |------------|------------|
//! | 0 | 20 |
//! | 1 | 24 |
//! | 2 | 28 |
//! | 3 | 32 |
//! | 4 | 40 |
//! | 5 | 48 |
//! | 6 | 56 |
//! | 7 | 64 |

use super::convert_bits::convert_bits;
use crate::error::{CashAddrError, Result};
use core::fmt;

/// Hash length in bytes for each size class, indexed by class
const HASH_SIZES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

/// Cashaddr address type, a 3-bit tag stored above the size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressType(u8);

impl AddressType {
    pub const P2PKH: AddressType = AddressType(0);
    pub const P2SH: AddressType = AddressType(1);
    /// Token-aware P2PKH (CHIP-2022-02)
    pub const TOKEN_P2PKH: AddressType = AddressType(2);
    /// Token-aware P2SH (CHIP-2022-02)
    pub const TOKEN_P2SH: AddressType = AddressType(3);

    pub const MAX: u8 = 7;

    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(CashAddrError::InvalidType(value));
        }
        Ok(AddressType(value))
    }

    pub fn to_u8(self) -> u8 {
        self.0
    }

    /// Parse a type name (`p2pkh`, `p2sh`, `token-p2pkh`, `token-p2sh`) or a number 0-7.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "p2pkh" => Ok(Self::P2PKH),
            "p2sh" => Ok(Self::P2SH),
            "token-p2pkh" => Ok(Self::TOKEN_P2PKH),
            "token-p2sh" => Ok(Self::TOKEN_P2SH),
            other => {
                let value: u8 = other
                    .parse()
                    .map_err(|_| CashAddrError::UnknownAddressType(name.to_string()))?;
                Self::new(value)
            }
        }
    }
}

impl TryFrom<u8> for AddressType {
    type Error = CashAddrError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::P2PKH => write!(f, "p2pkh"),
            Self::P2SH => write!(f, "p2sh"),
            Self::TOKEN_P2PKH => write!(f, "token-p2pkh"),
            Self::TOKEN_P2SH => write!(f, "token-p2sh"),
            AddressType(other) => write!(f, "{}", other),
        }
    }
}

/// Size class for a hash of `len` bytes
pub fn size_class(len: usize) -> Result<u8> {
    HASH_SIZES
        .iter()
        .position(|&size| size == len)
        .map(|class| class as u8)
        .ok_or(CashAddrError::UnsupportedSize(len))
}

/// Hash length in bytes for a size class (only the low 3 bits are used)
pub fn hash_size(class: u8) -> usize {
    HASH_SIZES[(class & 0x07) as usize]
}

pub fn version_byte(address_type: AddressType, hash_len: usize) -> Result<u8> {
    Ok((address_type.to_u8() << 3) | size_class(hash_len)?)
}

/// Prepend the version byte to `hash` and regroup the result into 5-bit symbols.
pub fn pack(hash: &[u8], address_type: AddressType) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(hash.len() + 1);
    data.push(version_byte(address_type, hash.len())?);
    data.extend_from_slice(hash);

    convert_bits::<8, 5, true>(&data)
}

/// Inverse of [`pack`]: regroup symbols into bytes and split off the version byte.
pub fn unpack(symbols: &[u8]) -> Result<(AddressType, Vec<u8>)> {
    let mut data = convert_bits::<5, 8, false>(symbols)?;
    if data.is_empty() {
        return Err(CashAddrError::InvalidLength("Empty payload".to_string()));
    }

    let version = data.remove(0);
    let address_type = AddressType::new(version >> 3)?;

    let expected = hash_size(version);
    if data.len() != expected {
        return Err(CashAddrError::InvalidLength(format!(
            "size class {} requires {} bytes, got {}",
            version & 0x07,
            expected,
            data.len()
        )));
    }

    Ok((address_type, data))
}
