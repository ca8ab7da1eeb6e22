pub mod address;
mod error;
pub mod networks;
mod try_into_js_value;
pub mod wasm;

// re-export bitcoin from the miniscript crate
pub use ::miniscript::bitcoin;

pub use address::{
    decode, decode_with_coin, decode_with_network, encode, encode_with_coin, encode_with_network,
    AddressType, CashAddrCodec, CashAddress, ScriptCodec,
};
pub use error::{CashAddrError, Result};
pub use networks::Network;
pub use wasm::CashAddrNamespace;
