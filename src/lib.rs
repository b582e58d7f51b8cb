//! Transcoding between UTF-8, UTF-16 and UTF-32 with explicit byte order.
//!
//! UTF-16 and UTF-32 input is either a slice of units whose in-memory image
//! holds bytes in a declared [`Endianness`] (see [`CodeUnit`]), or a raw byte
//! buffer. A buffer may instead start with a byte-order mark, in which case
//! the `_with_bom` functions work out the order themselves.
//!
//! ```
//! use utf_convert::{bom_for, encode_u16_to_u8_with_bom, Endianness};
//!
//! let bom: u16 = bom_for(Endianness::BigEndian);
//! let smile = [0xD83Du16, 0xDE00].map(|unit| u16::from_ne_bytes(unit.to_be_bytes()));
//! let utf8 = encode_u16_to_u8_with_bom(&[bom, smile[0], smile[1]])?;
//! assert_eq!(utf8, "😀".as_bytes());
//! # Ok::<(), utf_convert::Error>(())
//! ```

pub mod bom;
mod converter;
mod decode;
mod encode;
mod error;
mod utf;

pub use bom::{bom_for, detect_bom, endianness_of, BOM};
pub use converter::{Converter, Validation};
pub use error::{Error, Result};
pub use utf::{CodeUnit, Endianness};

/// UTF-32 units laid out in `endianness` to UTF-8, permissively.
pub fn encode_u32_to_u8(units: &[u32], endianness: Endianness) -> Result<Vec<u8>> {
    Converter::default().encode_u32_to_u8(units, endianness)
}

/// BOM-led UTF-32 units to UTF-8, permissively.
pub fn encode_u32_to_u8_with_bom(units: &[u32]) -> Result<Vec<u8>> {
    Converter::default().encode_u32_to_u8_with_bom(units)
}

/// UTF-16 units laid out in `endianness` to UTF-8, permissively.
pub fn encode_u16_to_u8(units: &[u16], endianness: Endianness) -> Result<Vec<u8>> {
    Converter::default().encode_u16_to_u8(units, endianness)
}

/// BOM-led UTF-16 units to UTF-8, permissively.
pub fn encode_u16_to_u8_with_bom(units: &[u16]) -> Result<Vec<u8>> {
    Converter::default().encode_u16_to_u8_with_bom(units)
}

/// UTF-8 to UTF-32 units laid out in `endianness`, permissively.
pub fn decode_u8_to_u32(bytes: &[u8], endianness: Endianness, add_bom: bool) -> Result<Vec<u32>> {
    Converter::default().decode_u8_to_u32(bytes, endianness, add_bom)
}
