use crate::error::{CashAddrError, Result};

/// Regroup a sequence of `FROM`-bit values into `TO`-bit values.
///
/// Used as `convert_bits::<8, 5, true>` to turn bytes into symbols and as
/// `convert_bits::<5, 8, false>` to turn symbols back into bytes.
///
/// With `PAD`, a trailing partial group is shifted left and emitted. Without it the
/// leftover bits must be shorter than one input value and all zero, otherwise the
/// input was not produced by a padded conversion:
/// - `[31, 28, 0, 16]` leaves `0000` and decodes to `[0xff, 0x01]`
/// - `[31, 28, 0, 17]` leaves `0001` and is rejected
pub fn convert_bits<const FROM: u32, const TO: u32, const PAD: bool>(
    data: &[u8],
) -> Result<Vec<u8>> {
    debug_assert!(FROM > 0 && FROM <= 8 && TO > 0 && TO <= 8);

    let maxv: u32 = (1 << TO) - 1;
    let max_acc: u32 = (1 << (FROM + TO - 1)) - 1;
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::with_capacity((data.len() * FROM as usize).div_ceil(TO as usize));

    for &value in data {
        if (value as u32) >> FROM != 0 {
            return Err(CashAddrError::InvalidSymbol(value));
        }
        acc = ((acc << FROM) | value as u32) & max_acc;
        bits += FROM;

        while bits >= TO {
            bits -= TO;
            result.push(((acc >> bits) & maxv) as u8);
        }
    }

    if PAD {
        if bits > 0 {
            result.push(((acc << (TO - bits)) & maxv) as u8);
        }
    } else if bits >= FROM {
        return Err(CashAddrError::InvalidLength(format!(
            "{} leftover bits after regrouping",
            bits
        )));
    } else if ((acc << (TO - bits)) & maxv) != 0 {
        return Err(CashAddrError::InvalidPadding);
    }

    Ok(result)
}
