//! Cashaddr address encoding and decoding.
//!
//! - [`checksum`]: the 40-bit polymod and prefix expansion
//! - [`convert_bits`]: regrouping between 8-bit bytes and 5-bit symbols
//! - [`payload`]: version byte (type and size class) and payload packing
//! - [`cashaddr`]: the string codec
//! - [`networks`]: network-aware helpers
//!
//! # Examples
//!
//! ```rust
//! use wasm_cashaddr::address::{encode, decode, AddressType};
//!
//! let hash = [0u8; 20];
//! let address = encode("bitcoincash", &hash, AddressType::P2PKH).unwrap();
//! let decoded = decode(&address, None).unwrap();
//! assert_eq!(decoded.hash, hash);
//! ```

pub mod cashaddr;
pub mod checksum;
pub mod convert_bits;
pub mod networks;
pub mod payload;
mod script;

pub use cashaddr::{decode, encode, CashAddrCodec, CashAddress, CHARSET};
pub use networks::{
    decode_with_coin, decode_with_network, encode_with_coin, encode_with_network,
};
pub use payload::AddressType;
pub use script::ScriptCodec;

// CashAddrCodec::new(prefix)
//   - prefix: Network prefix (e.g., "bitcoincash", "ecash")

// Bitcoin Cash
// https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
pub const BITCOIN_CASH_CASHADDR: CashAddrCodec = CashAddrCodec::new("bitcoincash");
pub const BITCOIN_CASH_TESTNET_CASHADDR: CashAddrCodec = CashAddrCodec::new("bchtest");
pub const BITCOIN_CASH_REGTEST_CASHADDR: CashAddrCodec = CashAddrCodec::new("bchreg");

// eCash
// https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/src/chainparams.cpp
pub const ECASH_CASHADDR: CashAddrCodec = CashAddrCodec::new("ecash");
pub const ECASH_TEST_CASHADDR: CashAddrCodec = CashAddrCodec::new("ectest");
