//! Cashaddr encoding/decoding for Bitcoin Cash and eCash.
//!
//! Implements the cashaddr format as defined in:
//! - Spec: https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
//! - Reference implementation: https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/src/cashaddr.cpp
//!
//! An address is `prefix:payload`, where the payload is the version byte and hash
//! regrouped into 5-bit symbols followed by 8 checksum symbols, each written with
//! the 32-character alphabet [`CHARSET`].
//!
//! # Decoding rules
//!
//! - Upper case is accepted, mixed case is rejected
//! - The prefix may be omitted; the caller then supplies the one to check against
//! - The checksum covers the prefix, so the same hash encodes differently per network
//! - Padding bits after the last whole byte must be zero
//!
//! ## Why We Use `Fe32` from the bech32 Crate
//!
//! Bech32 and cashaddr share the same alphabet, so `Fe32` handles the
//! character/value mapping (`.to_char()`, `.from_char()`). The checksum, the prefix
//! expansion and the bit regrouping are cashaddr-specific and live in sibling modules.

use super::checksum::{create_checksum, verify_checksum, CHECKSUM_LEN};
use super::payload::{pack, unpack, AddressType};
use crate::error::{CashAddrError, Result};
use bech32::Fe32;
use core::fmt;
use core::str::FromStr;
use tracing::{debug, trace};

/// The cashaddr character set, indexed by 5-bit value
pub const CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Separator between prefix and payload
pub const SEPARATOR: char = ':';

/// A decoded cashaddr: network prefix, address type and hash
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CashAddress {
    pub prefix: String,
    pub address_type: AddressType,
    pub hash: Vec<u8>,
}

impl CashAddress {
    /// Validates the prefix and the hash size up front, so that `Display` cannot fail
    pub fn new(prefix: &str, address_type: AddressType, hash: Vec<u8>) -> Result<Self> {
        validate_prefix(prefix)?;
        super::payload::size_class(hash.len())?;
        Ok(CashAddress {
            prefix: prefix.to_string(),
            address_type,
            hash,
        })
    }

    pub fn encode(&self) -> Result<String> {
        encode(&self.prefix, &self.hash, self.address_type)
    }
}

impl fmt::Display for CashAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.encode().map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl FromStr for CashAddress {
    type Err = CashAddrError;

    /// Parse a fully qualified address; use [`decode`] to supply a default prefix.
    fn from_str(s: &str) -> Result<Self> {
        decode(s, None)
    }
}

/// Prefixes are non-empty and made of lowercase ASCII letters and digits.
fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(CashAddrError::MissingPrefix);
    }
    match prefix
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
    {
        Some(c) => Err(CashAddrError::InvalidCharacter(c)),
        None => Ok(()),
    }
}

/// Reject addresses that mix upper and lower case letters, naming the first
/// letter whose case disagrees with the ones before it.
fn check_case(address: &str) -> Result<()> {
    let mut upper = None;
    for c in address.chars().filter(char::is_ascii_alphabetic) {
        match upper {
            None => upper = Some(c.is_ascii_uppercase()),
            Some(u) if u != c.is_ascii_uppercase() => {
                return Err(CashAddrError::InvalidCharacter(c));
            }
            Some(_) => {}
        }
    }
    Ok(())
}

fn symbols_to_string(prefix: &str, symbols: &[u8]) -> Result<String> {
    let mut result = String::with_capacity(prefix.len() + 1 + symbols.len());
    result.push_str(prefix);
    result.push(SEPARATOR);
    for &value in symbols {
        let fe = Fe32::try_from(value).map_err(|_| CashAddrError::InvalidSymbol(value))?;
        result.push(fe.to_char());
    }
    Ok(result)
}

fn string_to_symbols(payload: &str) -> Result<Vec<u8>> {
    payload
        .chars()
        .map(|c| {
            Fe32::from_char(c)
                .map(|fe| fe.to_u8())
                .map_err(|_| CashAddrError::InvalidCharacter(c))
        })
        .collect()
}

/// Encode `hash` of the given type as a cashaddr string under `prefix`.
pub fn encode(prefix: &str, hash: &[u8], address_type: AddressType) -> Result<String> {
    validate_prefix(prefix)?;

    let mut symbols = pack(hash, address_type)?;
    let checksum = create_checksum(prefix, &symbols);
    symbols.extend_from_slice(&checksum);

    let address = symbols_to_string(prefix, &symbols)?;
    trace!(%address, %address_type, hash_len = hash.len(), "encoded cashaddr");
    Ok(address)
}

/// Decode a cashaddr string.
///
/// When the address has no `prefix:` part, `default_prefix` is used for the
/// checksum; without one the address is rejected with [`CashAddrError::MissingPrefix`].
/// The returned prefix is always lowercase.
pub fn decode(address: &str, default_prefix: Option<&str>) -> Result<CashAddress> {
    let result = decode_unchecked_prefix(address, default_prefix);
    match &result {
        Ok(decoded) => trace!(
            prefix = %decoded.prefix,
            address_type = %decoded.address_type,
            hash_len = decoded.hash.len(),
            "decoded cashaddr"
        ),
        Err(e) => debug!(error = %e, address_len = address.len(), "rejected cashaddr"),
    }
    result
}

fn decode_unchecked_prefix(address: &str, default_prefix: Option<&str>) -> Result<CashAddress> {
    check_case(address)?;
    let address = address.to_ascii_lowercase();

    let (prefix, payload) = match address.rsplit_once(SEPARATOR) {
        Some((prefix, payload)) => (prefix, payload),
        None => (
            default_prefix.ok_or(CashAddrError::MissingPrefix)?,
            address.as_str(),
        ),
    };
    validate_prefix(prefix)?;

    let symbols = string_to_symbols(payload)?;
    if symbols.len() <= CHECKSUM_LEN {
        return Err(CashAddrError::InvalidLength(format!(
            "{} symbols, need more than {}",
            symbols.len(),
            CHECKSUM_LEN
        )));
    }

    if !verify_checksum(prefix, &symbols) {
        return Err(CashAddrError::ChecksumMismatch);
    }

    let (address_type, hash) = unpack(&symbols[..symbols.len() - CHECKSUM_LEN])?;

    Ok(CashAddress {
        prefix: prefix.to_string(),
        address_type,
        hash,
    })
}

/// CashAddr codec bound to one network prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashAddrCodec {
    /// Cashaddr prefix (e.g., "bitcoincash", "ecash")
    pub prefix: &'static str,
}

impl CashAddrCodec {
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    pub fn encode(&self, hash: &[u8], address_type: AddressType) -> Result<String> {
        encode(self.prefix, hash, address_type)
    }

    /// Decode an address that either carries this codec's prefix or none at all.
    pub fn decode(&self, address: &str) -> Result<CashAddress> {
        let decoded = decode(address, Some(self.prefix))?;
        if decoded.prefix != self.prefix {
            return Err(CashAddrError::PrefixMismatch {
                expected: self.prefix.to_string(),
                found: decoded.prefix,
            });
        }
        Ok(decoded)
    }
}
