//! Network-aware address encoding and decoding.
//!
//! This module bridges the Network enum with the cashaddr codecs, providing
//! convenient functions to encode/decode addresses using network identifiers.

use super::{
    AddressType, CashAddrCodec, CashAddress, BITCOIN_CASH_CASHADDR, BITCOIN_CASH_REGTEST_CASHADDR,
    BITCOIN_CASH_TESTNET_CASHADDR, ECASH_CASHADDR, ECASH_TEST_CASHADDR,
};
use crate::error::{CashAddrError, Result};
use crate::networks::Network;

/// Get the codec for a given network.
pub fn get_codec(network: Network) -> &'static CashAddrCodec {
    match network {
        Network::BitcoinCash => &BITCOIN_CASH_CASHADDR,
        Network::BitcoinCashTestnet => &BITCOIN_CASH_TESTNET_CASHADDR,
        Network::BitcoinCashRegtest => &BITCOIN_CASH_REGTEST_CASHADDR,
        Network::Ecash => &ECASH_CASHADDR,
        Network::EcashTestnet => &ECASH_TEST_CASHADDR,
    }
}

/// Resolve a network from a network name, a coin name or a cashaddr prefix.
pub fn parse_network(name: &str) -> Result<Network> {
    Network::from_name_exact(name)
        .or_else(|| Network::from_coin_name(name))
        .or_else(|| Network::from_cashaddr_prefix(name))
        .ok_or_else(|| CashAddrError::UnknownNetwork(name.to_string()))
}

pub fn encode_with_network(
    hash: &[u8],
    address_type: AddressType,
    network: Network,
) -> Result<String> {
    get_codec(network).encode(hash, address_type)
}

/// Decode an address for a network. The network prefix may be omitted.
pub fn decode_with_network(address: &str, network: Network) -> Result<CashAddress> {
    get_codec(network).decode(address)
}

/// Decode an address, selecting the network by name (e.g. "bch", "BitcoinCashTestnet", "ectest").
pub fn decode_with_coin(address: &str, coin: &str) -> Result<CashAddress> {
    decode_with_network(address, parse_network(coin)?)
}

pub fn encode_with_coin(hash: &[u8], address_type: AddressType, coin: &str) -> Result<String> {
    encode_with_network(hash, address_type, parse_network(coin)?)
}
