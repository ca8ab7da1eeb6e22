//! Conversion between cashaddr addresses and P2PKH/P2SH output scripts.

use super::cashaddr::{CashAddrCodec, CashAddress};
use super::payload::AddressType;
use crate::bitcoin::hashes::Hash;
use crate::bitcoin::{PubkeyHash, Script, ScriptBuf, ScriptHash};
use crate::error::{CashAddrError, Result};

/// Trait for codecs that translate between addresses and output scripts
pub trait ScriptCodec {
    fn from_output_script(&self, script: &Script) -> Result<String>;
    fn to_output_script(&self, address: &str) -> Result<ScriptBuf>;
}

impl CashAddress {
    /// Build the address for a P2PKH or P2SH output script.
    pub fn from_output_script(prefix: &str, script: &Script) -> Result<Self> {
        if script.is_p2pkh() {
            let hash = script.as_bytes()[3..23].to_vec();
            CashAddress::new(prefix, AddressType::P2PKH, hash)
        } else if script.is_p2sh() {
            let hash = script.as_bytes()[2..22].to_vec();
            CashAddress::new(prefix, AddressType::P2SH, hash)
        } else {
            Err(CashAddrError::InvalidScript(
                "CashAddr only supports P2PKH and P2SH".to_string(),
            ))
        }
    }

    /// Output script paying to this address. Token-aware types map to the same
    /// scripts as their plain counterparts.
    pub fn to_output_script(&self) -> Result<ScriptBuf> {
        let hash: [u8; 20] = self.hash.as_slice().try_into().map_err(|_| {
            CashAddrError::InvalidScript(format!(
                "Only 20-byte hashes have an output script, got {} bytes",
                self.hash.len()
            ))
        })?;

        match self.address_type {
            AddressType::P2PKH | AddressType::TOKEN_P2PKH => Ok(ScriptBuf::new_p2pkh(
                &PubkeyHash::from_byte_array(hash),
            )),
            AddressType::P2SH | AddressType::TOKEN_P2SH => {
                Ok(ScriptBuf::new_p2sh(&ScriptHash::from_byte_array(hash)))
            }
            other => Err(CashAddrError::InvalidScript(format!(
                "No output script for address type {}",
                other
            ))),
        }
    }
}

impl ScriptCodec for CashAddrCodec {
    fn from_output_script(&self, script: &Script) -> Result<String> {
        CashAddress::from_output_script(self.prefix, script)?.encode()
    }

    fn to_output_script(&self, address: &str) -> Result<ScriptBuf> {
        self.decode(address)?.to_output_script()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_HASH_20: &str = "F5BF48B397DAE70BE82B3CCA4793F8EB2B6CDAC9";

    fn test_hash() -> [u8; 20] {
        hex::decode(TEST_HASH_20).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_p2pkh_script_roundtrip() {
        let script = ScriptBuf::new_p2pkh(&PubkeyHash::from_byte_array(test_hash()));

        let codec = CashAddrCodec::new("bitcoincash");
        let address = codec.from_output_script(&script).unwrap();
        assert_eq!(
            address,
            "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2"
        );

        let decoded_script = codec.to_output_script(&address).unwrap();
        assert_eq!(decoded_script, script);
    }

    #[test]
    fn test_p2sh_script_type() {
        let script = ScriptBuf::new_p2sh(&ScriptHash::from_byte_array(test_hash()));

        let codec = CashAddrCodec::new("bchtest");
        let address = codec.from_output_script(&script).unwrap();

        // P2SH addresses start with 'p' after the prefix
        assert!(address.starts_with("bchtest:p"));
        assert_eq!(codec.to_output_script(&address).unwrap(), script);
    }

    #[test]
    fn test_token_aware_maps_to_plain_script() {
        let token = CashAddress::new("bitcoincash", AddressType::TOKEN_P2PKH, test_hash().to_vec())
            .unwrap();
        let plain = CashAddress::new("bitcoincash", AddressType::P2PKH, test_hash().to_vec())
            .unwrap();
        assert_eq!(
            token.to_output_script().unwrap(),
            plain.to_output_script().unwrap()
        );
    }

    #[test]
    fn test_unsupported_scripts() {
        let witness = ScriptBuf::from_bytes([vec![0x00, 0x14], test_hash().to_vec()].concat());
        assert!(matches!(
            CashAddress::from_output_script("bitcoincash", &witness),
            Err(CashAddrError::InvalidScript(_))
        ));

        let large = CashAddress::new("bitcoincash", AddressType::P2SH, vec![0; 32]).unwrap();
        assert!(matches!(
            large.to_output_script(),
            Err(CashAddrError::InvalidScript(_))
        ));

        let custom = CashAddress::new("bitcoincash", AddressType::new(5).unwrap(), vec![0; 20])
            .unwrap();
        assert!(matches!(
            custom.to_output_script(),
            Err(CashAddrError::InvalidScript(_))
        ));
    }
}
