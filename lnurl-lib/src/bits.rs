//! Regrouping of integer sequences between bit widths.
//!
//! This is the general base conversion behind segwit addresses: bytes become
//! 5-bit bech32 symbols on the way out (`8 -> 5`, padded) and symbols become
//! bytes on the way back (`5 -> 8`, unpadded). The unpadded direction rejects
//! any leftover bits that would carry information, so a tampered payload
//! cannot silently lose data.

/// Widest group this module handles; keeps the accumulator within `u32`.
pub const MAX_GROUP_BITS: u32 = 16;

/// Errors produced by [`convert_bits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertBitsError {
    /// A group width outside `1..=MAX_GROUP_BITS`.
    #[error("unsupported group width {from} -> {to}")]
    InvalidWidth {
        /// Input width
        from: u32,
        /// Output width
        to: u32,
    },
    /// An input value does not fit in the input width.
    #[error("value {value} does not fit in {bits} bits")]
    InvalidGroup {
        /// Offending value
        value: u32,
        /// Input width
        bits: u32,
    },
    /// A whole input group is left over after unpadded conversion.
    #[error("{bits} leftover bits form a full input group")]
    ExcessPadding {
        /// Number of leftover bits
        bits: u32,
    },
    /// The leftover bits of an unpadded conversion are not zero.
    #[error("non-zero padding")]
    NonZeroPadding,
}

/// Converts `data` from `from`-bit groups to `to`-bit groups.
///
/// With `pad` set, a trailing partial group is zero-filled and emitted.
/// Without it, the conversion fails if the leftover bits span a full input
/// group or are non-zero.
pub fn convert_bits<I, V>(
    data: I,
    from: u32,
    to: u32,
    pad: bool,
) -> Result<Vec<u32>, ConvertBitsError>
where
    I: IntoIterator<Item = V>,
    V: Into<u32>,
{
    if !(1..=MAX_GROUP_BITS).contains(&from) || !(1..=MAX_GROUP_BITS).contains(&to) {
        return Err(ConvertBitsError::InvalidWidth { from, to });
    }

    let max_value: u32 = (1 << to) - 1;
    let max_acc: u32 = (1 << (from + to - 1)) - 1;
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut out = Vec::new();

    for value in data {
        let value = value.into();
        if value >> from != 0 {
            return Err(ConvertBitsError::InvalidGroup { value, bits: from });
        }
        acc = ((acc << from) | value) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push((acc >> bits) & max_value);
        }
    }

    if pad {
        if bits > 0 {
            out.push((acc << (to - bits)) & max_value);
        }
    } else if bits >= from {
        return Err(ConvertBitsError::ExcessPadding { bits });
    } else if (acc << (to - bits)) & max_value != 0 {
        return Err(ConvertBitsError::NonZeroPadding);
    }

    Ok(out)
}
