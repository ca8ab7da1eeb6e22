use anyhow::{Context, Result};
use std::io::{self, Read};

/// Return `arg`, or the trimmed contents of stdin when `arg` is "-"
pub fn read_arg_or_stdin(arg: &str, what: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.trim().to_string());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .with_context(|| format!("Failed to read {} from stdin", what))?;
    Ok(buffer.trim().to_string())
}

/// Decode a hex hash, accepting an optional 0x prefix
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).with_context(|| format!("Invalid hex string: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_arg_passthrough() {
        assert_eq!(
            read_arg_or_stdin("  bitcoincash:qqq  ", "address").unwrap(),
            "bitcoincash:qqq"
        );
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("0a0B").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex("0xff00\n").unwrap(), vec![0xff, 0x00]);
        assert!(decode_hex("zz").is_err());
        assert!(decode_hex("abc").is_err());
    }
}
