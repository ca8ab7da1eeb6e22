use crate::input::{decode_hex, read_arg_or_stdin};
use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::debug;
use wasm_cashaddr::address::networks::parse_network;
use wasm_cashaddr::{decode, decode_with_network, encode, AddressType, CashAddress, Network};

#[derive(Subcommand)]
pub enum AddressCommand {
    /// Encode a hash (hex) to a cashaddr address
    Encode {
        /// The hash as hex, or "-" to read it from stdin
        hash: String,
        /// Network (bch, tbch, ecash, BitcoinCashTestnet, bchreg, etc.)
        #[arg(short, long, default_value = "bch")]
        network: String,
        /// Literal prefix to use instead of the network's
        #[arg(short, long)]
        prefix: Option<String>,
        /// Address type: p2pkh, p2sh, token-p2pkh, token-p2sh or 0-7
        #[arg(short = 't', long = "type", default_value = "p2pkh")]
        address_type: String,
    },
    /// Decode a cashaddr address to its type and hash
    Decode {
        /// The address to decode, or "-" to read it from stdin
        address: String,
        /// Network the address must belong to; also supplies a missing prefix
        #[arg(short, long)]
        network: Option<String>,
    },
    /// Decode a cashaddr address to its output script (hex)
    Script {
        /// The address to decode, or "-" to read it from stdin
        address: String,
        #[arg(short, long)]
        network: Option<String>,
    },
}

pub fn handle_command(command: AddressCommand) -> Result<()> {
    match command {
        AddressCommand::Encode {
            hash,
            network,
            prefix,
            address_type,
        } => {
            let hash = decode_hex(&read_arg_or_stdin(&hash, "hash")?)?;
            let address_type = AddressType::from_name(&address_type)?;
            let prefix = match prefix {
                Some(prefix) => prefix,
                None => parse_network(&network)?.cashaddr_prefix().to_string(),
            };
            let address =
                encode(&prefix, &hash, address_type).context("Failed to encode hash to address")?;
            println!("{}", address);
            Ok(())
        }
        AddressCommand::Decode { address, network } => {
            let decoded = decode_address(&address, network.as_deref())?;
            print!("{}", format_decoded(&decoded));
            Ok(())
        }
        AddressCommand::Script { address, network } => {
            let decoded = decode_address(&address, network.as_deref())?;
            let script = decoded
                .to_output_script()
                .context("Failed to build output script")?;
            println!("{}", hex::encode(script.as_bytes()));
            Ok(())
        }
    }
}

fn decode_address(address: &str, network: Option<&str>) -> Result<CashAddress> {
    let address = read_arg_or_stdin(address, "address")?;
    debug!(%address, network = ?network, "decoding address");
    let decoded = match network {
        Some(network) => decode_with_network(&address, parse_network(network)?),
        None => decode(&address, None),
    };
    decoded.context("Failed to decode address")
}

fn format_decoded(decoded: &CashAddress) -> String {
    let network = Network::from_cashaddr_prefix(&decoded.prefix)
        .map(|n| n.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    format!(
        "prefix: {}\nnetwork: {}\ntype: {}\nhash: {}\n",
        decoded.prefix,
        network,
        decoded.address_type,
        hex::encode(&decoded.hash)
    )
}
