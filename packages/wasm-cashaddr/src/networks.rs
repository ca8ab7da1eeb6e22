//! Definitions of the networks that use cashaddr
// Inspired by https://github.com/BitGo/BitGoJS/blob/master/modules/utxo-lib/src/networks.ts
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    // https://github.com/bitcoin-cash-node/bitcoin-cash-node/blob/master/src/chainparams.cpp
    BitcoinCash,
    BitcoinCashTestnet,
    BitcoinCashRegtest,

    // https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/src/chainparams.cpp
    Ecash,
    EcashTestnet,
}

impl Network {
    /// Array containing all network variants
    pub const ALL: &'static [Network] = &[
        Network::BitcoinCash,
        Network::BitcoinCashTestnet,
        Network::BitcoinCashRegtest,
        Network::Ecash,
        Network::EcashTestnet,
    ];

    /// Returns the canonical string name of this network
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::BitcoinCash => "BitcoinCash",
            Network::BitcoinCashTestnet => "BitcoinCashTestnet",
            Network::BitcoinCashRegtest => "BitcoinCashRegtest",
            Network::Ecash => "Ecash",
            Network::EcashTestnet => "EcashTestnet",
        }
    }

    pub fn from_name_exact(name: &str) -> Option<Network> {
        match name {
            "BitcoinCash" => Some(Network::BitcoinCash),
            "BitcoinCashTestnet" => Some(Network::BitcoinCashTestnet),
            "BitcoinCashRegtest" => Some(Network::BitcoinCashRegtest),
            "Ecash" => Some(Network::Ecash),
            "EcashTestnet" => Some(Network::EcashTestnet),
            _ => None,
        }
    }

    /// Convert from a bitgo coin name to a Network enum value.
    pub fn from_coin_name(name: &str) -> Option<Network> {
        match name {
            "bch" => Some(Network::BitcoinCash),
            "tbch" => Some(Network::BitcoinCashTestnet),
            "bcha" | "xec" => Some(Network::Ecash),
            "tbcha" | "txec" => Some(Network::EcashTestnet),
            _ => None,
        }
    }

    /// Cashaddr prefix used by this network
    pub fn cashaddr_prefix(self) -> &'static str {
        match self {
            Network::BitcoinCash => "bitcoincash",
            Network::BitcoinCashTestnet => "bchtest",
            Network::BitcoinCashRegtest => "bchreg",
            Network::Ecash => "ecash",
            Network::EcashTestnet => "ectest",
        }
    }

    /// Look a network up by its cashaddr prefix (case-insensitive).
    pub fn from_cashaddr_prefix(prefix: &str) -> Option<Network> {
        let prefix = prefix.to_ascii_lowercase();
        Network::ALL
            .iter()
            .copied()
            .find(|network| network.cashaddr_prefix() == prefix)
    }

    pub fn mainnet(self) -> Network {
        match self {
            Network::BitcoinCash | Network::BitcoinCashTestnet | Network::BitcoinCashRegtest => {
                Network::BitcoinCash
            }
            Network::Ecash | Network::EcashTestnet => Network::Ecash,
        }
    }

    pub fn is_mainnet(self) -> bool {
        self == self.mainnet()
    }

    pub fn is_testnet(self) -> bool {
        !self.is_mainnet()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::from_name_exact(s).ok_or_else(|| format!("Unknown network: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_networks() {
        assert_eq!(Network::ALL.len(), 5);

        // Verify no duplicates
        for (i, network1) in Network::ALL.iter().enumerate() {
            for (j, network2) in Network::ALL.iter().enumerate() {
                if i != j {
                    assert_ne!(network1, network2);
                    assert_ne!(network1.cashaddr_prefix(), network2.cashaddr_prefix());
                }
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "BitcoinCash".parse::<Network>().unwrap(),
            Network::BitcoinCash
        );
        assert_eq!("Ecash".parse::<Network>().unwrap(), Network::Ecash);

        assert!("InvalidNetwork".parse::<Network>().is_err());
    }

    #[test]
    fn test_roundtrip_as_str() {
        for &network in Network::ALL {
            let as_str = network.as_str();
            assert_eq!(as_str, network.to_string());

            let parsed = Network::from_name_exact(as_str).unwrap();
            assert_eq!(network, parsed, "Round-trip via as_str failed for {}", as_str);
        }
    }

    #[test]
    fn test_cashaddr_prefix() {
        assert_eq!(Network::BitcoinCash.cashaddr_prefix(), "bitcoincash");
        assert_eq!(Network::BitcoinCashTestnet.cashaddr_prefix(), "bchtest");
        assert_eq!(Network::EcashTestnet.cashaddr_prefix(), "ectest");

        for &network in Network::ALL {
            assert_eq!(
                Network::from_cashaddr_prefix(network.cashaddr_prefix()),
                Some(network)
            );
        }
        assert_eq!(
            Network::from_cashaddr_prefix("BCHTEST"),
            Some(Network::BitcoinCashTestnet)
        );
        assert_eq!(Network::from_cashaddr_prefix("bc"), None);
    }

    #[test]
    fn test_mainnet() {
        assert!(Network::BitcoinCash.is_mainnet());
        assert!(Network::BitcoinCashRegtest.is_testnet());
        assert_eq!(Network::EcashTestnet.mainnet(), Network::Ecash);
        assert_eq!(Network::from_coin_name("tbch"), Some(Network::BitcoinCashTestnet));
        assert_eq!(Network::from_coin_name("btc"), None);
    }
}
