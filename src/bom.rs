//! Byte-order mark construction and recognition.
//!
//! The BOM is U+FEFF placed as the first unit of a UTF-16 or UTF-32 buffer.
//! Its byte image differs between the two byte orders, which is what lets a
//! reader tell them apart.

use crate::error::{Error, Result};
use crate::utf::{CodeUnit, Endianness};

/// The byte-order mark codepoint.
pub const BOM: u32 = 0xFEFF;

pub const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];
pub const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// The BOM unit for `endianness`, laid out so that its in-memory image is the
/// BOM byte pattern of that order.
///
/// ```
/// use utf_convert::{bom_for, Endianness};
///
/// let bom: u32 = bom_for(Endianness::LittleEndian);
/// assert_eq!(bom.to_ne_bytes(), [0xFF, 0xFE, 0x00, 0x00]);
/// let bom: u16 = bom_for(Endianness::BigEndian);
/// assert_eq!(bom.to_ne_bytes(), [0xFE, 0xFF]);
/// ```
pub fn bom_for<U: CodeUnit>(endianness: Endianness) -> U {
    U::write(U::from_bytes(U::BE_BOM, Endianness::BigEndian), endianness)
}

/// The BOM byte pattern of `endianness` for units of type `U`.
pub fn bom_bytes<U: CodeUnit>(endianness: Endianness) -> &'static [u8] {
    match endianness {
        Endianness::BigEndian => U::BE_BOM,
        Endianness::LittleEndian => U::LE_BOM,
    }
}

/// Whether `first` is the BOM of `endianness`.
#[inline]
pub fn detect_bom<U: CodeUnit>(first: U, endianness: Endianness) -> bool {
    Into::<u32>::into(first.read(endianness)) == BOM
}

/// The byte order signalled by `first`.
pub fn endianness_of<U: CodeUnit>(first: U) -> Result<Endianness> {
    [Endianness::BigEndian, Endianness::LittleEndian]
        .into_iter()
        .find(|&endianness| detect_bom(first, endianness))
        .ok_or(Error::UnrecognizedBom { unit: first.into() })
}

/// Splits a BOM-tagged unit buffer into its byte order and its content.
pub fn strip_bom<U: CodeUnit>(units: &[U]) -> Result<(Endianness, &[U])> {
    let (&first, rest) = units.split_first().ok_or(Error::EmptyBomBuffer)?;
    Ok((endianness_of(first)?, rest))
}

/// Splits a BOM-tagged byte buffer of `U`-wide units into its byte order and
/// the bytes following the BOM.
pub fn strip_bom_bytes<U: CodeUnit>(bytes: &[u8]) -> Result<(Endianness, &[u8])> {
    if bytes.is_empty() {
        return Err(Error::EmptyBomBuffer);
    }
    if bytes.len() < U::WIDTH {
        return Err(Error::TruncatedUnit {
            len: bytes.len(),
            width: U::WIDTH,
        });
    }
    let (head, rest) = bytes.split_at(U::WIDTH);
    if head == U::BE_BOM {
        Ok((Endianness::BigEndian, rest))
    } else if head == U::LE_BOM {
        Ok((Endianness::LittleEndian, rest))
    } else {
        Err(Error::UnrecognizedBom {
            unit: U::from_bytes(head, Endianness::BigEndian).into(),
        })
    }
}
