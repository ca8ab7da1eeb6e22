//! Cashaddr checksum: the 40-bit polymod and the prefix expansion it runs over.
//!
//! Reference: https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md#checksum

/// Number of 5-bit checksum symbols appended to the payload
pub const CHECKSUM_LEN: usize = 8;

/// Generator constants, one per bit of the symbol shifted out of the 40-bit state.
const GENERATORS: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Compute the cashaddr polymod over a sequence of 5-bit values.
///
/// The state starts at `1` and the result is XORed with `1`, so an empty input
/// yields `0`. Only the low 40 bits of the result are meaningful.
///
/// ## Algorithm Steps
/// 1. Extract the top 5 bits of the state: `c0 = c >> 35`
/// 2. Shift the remaining 35 bits left by 5 and XOR in the input value
/// 3. XOR in `GENERATORS[i]` for every bit `i` set in `c0`
pub fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07ffffffff) << 5) ^ (d as u64);

        for (i, generator) in GENERATORS.iter().enumerate() {
            if (c0 & (1 << i)) != 0 {
                c ^= generator;
            }
        }
    }

    c ^ 1
}

/// Expand the cashaddr prefix for checksum calculation.
///
/// ```text
/// prefix = "bitcoincash"
/// expanded = [b & 31 for b in prefix] + [0]
///          = [2, 9, 20, 3, 15, 9, 14, 3, 1, 19, 8] + [0]
/// ```
pub fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(prefix.len() + 1);
    result.extend(prefix.bytes().map(|b| b & 0x1f));
    result.push(0); // separator
    result
}

/// Build the 8 checksum symbols for a packed payload under `prefix`.
pub fn create_checksum(prefix: &str, payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut data = expand_prefix(prefix);
    data.extend_from_slice(payload);
    data.extend_from_slice(&[0; CHECKSUM_LEN]);

    let modulus = polymod(&data);

    let mut checksum = [0u8; CHECKSUM_LEN];
    for (i, digit) in checksum.iter_mut().enumerate() {
        *digit = ((modulus >> (5 * (7 - i))) & 0x1f) as u8;
    }
    checksum
}

/// Check that `symbols` (payload followed by its checksum) polymods to zero under `prefix`.
pub fn verify_checksum(prefix: &str, symbols: &[u8]) -> bool {
    let mut data = expand_prefix(prefix);
    data.extend_from_slice(symbols);
    polymod(&data) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polymod_empty_input() {
        assert_eq!(polymod(&[]), 0);
    }

    #[test]
    fn test_polymod_single_zero_symbol_is_not_valid() {
        assert_ne!(polymod(&[0]), 0);
    }

    #[test]
    fn test_expand_prefix() {
        assert_eq!(
            expand_prefix("bitcoincash"),
            vec![2, 9, 20, 3, 15, 9, 14, 3, 1, 19, 8, 0]
        );
        assert_eq!(expand_prefix("bchtest"), vec![2, 3, 8, 20, 5, 19, 20, 0]);
    }

    #[test]
    fn test_checksum_digits_are_5_bit() {
        let checksum = create_checksum("bitcoincash", &[1, 2, 3, 31, 30]);
        assert!(checksum.iter().all(|&d| d < 32));
    }

    #[test]
    fn test_create_then_verify() {
        let payload = [0u8, 17, 31, 4, 9, 12];
        let checksum = create_checksum("bchtest", &payload);

        let mut symbols = payload.to_vec();
        symbols.extend_from_slice(&checksum);
        assert!(verify_checksum("bchtest", &symbols));
        assert!(!verify_checksum("bitcoincash", &symbols));

        symbols[2] ^= 1;
        assert!(!verify_checksum("bchtest", &symbols));
    }
}
