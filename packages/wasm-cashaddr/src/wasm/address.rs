use crate::address::networks::{encode_with_coin, parse_network};
use crate::address::{decode, encode, AddressType};
use crate::try_into_js_value::TryIntoJsValue;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

#[wasm_bindgen]
pub struct CashAddrNamespace;

#[wasm_bindgen]
impl CashAddrNamespace {
    /// Encode a hash under an explicit prefix. `address_type` is 0-7.
    #[wasm_bindgen]
    pub fn encode(
        prefix: &str,
        hash: &[u8],
        address_type: u8,
    ) -> std::result::Result<String, JsValue> {
        let address_type =
            AddressType::new(address_type).map_err(|e| JsValue::from_str(&e.to_string()))?;
        encode(prefix, hash, address_type).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Encode a hash for a network or coin name (e.g. "bch", "tbch", "BitcoinCash").
    #[wasm_bindgen]
    pub fn encode_with_coin(
        hash: &[u8],
        address_type: u8,
        coin: &str,
    ) -> std::result::Result<String, JsValue> {
        let address_type =
            AddressType::new(address_type).map_err(|e| JsValue::from_str(&e.to_string()))?;
        encode_with_coin(hash, address_type, coin).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decode to `{ prefix, network, type, typeName, hash }`.
    ///
    /// `coin` selects the network whose prefix is assumed when the address has none,
    /// and which the address must belong to when given.
    #[wasm_bindgen]
    pub fn decode(address: &str, coin: Option<String>) -> std::result::Result<JsValue, JsValue> {
        let decoded = match coin.as_deref() {
            Some(coin) => {
                let network =
                    parse_network(coin).map_err(|e| JsValue::from_str(&e.to_string()))?;
                crate::address::decode_with_network(address, network)
            }
            None => decode(address, None),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        decoded.try_to_js_value().map_err(JsValue::from)
    }
}
