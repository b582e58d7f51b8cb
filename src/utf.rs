pub(crate) mod utf16sequence;
pub(crate) mod utf8sequence;

use std::{fmt, str::FromStr};

use crate::error::Error;

/// A codepoint being assembled from, or split into, code units.
pub(crate) trait Utf {
    type Point;
    fn get_codepoint(&self) -> u32;
    fn add_point(&mut self, point: Self::Point) -> bool;
    fn is_complete(&self) -> bool;
}

pub(crate) const fn is_surrogate(codepoint: u32) -> bool {
    matches!(codepoint, 0xD800..=0xDFFF)
}

/// Byte order of the code units in a UTF-16 or UTF-32 buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    /// Byte order of the host.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endianness::BigEndian
        } else {
            Endianness::LittleEndian
        }
    }

    #[inline]
    pub const fn u16_from_bytes(self, bytes: [u8; 2]) -> u16 {
        match self {
            Endianness::BigEndian => ((bytes[0] as u16) << 8) | bytes[1] as u16,
            Endianness::LittleEndian => ((bytes[1] as u16) << 8) | bytes[0] as u16,
        }
    }

    #[inline]
    pub const fn u32_from_bytes(self, bytes: [u8; 4]) -> u32 {
        match self {
            Endianness::BigEndian => {
                ((bytes[0] as u32) << 24)
                    | ((bytes[1] as u32) << 16)
                    | ((bytes[2] as u32) << 8)
                    | bytes[3] as u32
            }
            Endianness::LittleEndian => {
                ((bytes[3] as u32) << 24)
                    | ((bytes[2] as u32) << 16)
                    | ((bytes[1] as u32) << 8)
                    | bytes[0] as u32
            }
        }
    }

    #[inline]
    pub const fn u32_to_bytes(self, value: u32) -> [u8; 4] {
        let bytes = [
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ];
        match self {
            Endianness::BigEndian => bytes,
            Endianness::LittleEndian => [bytes[3], bytes[2], bytes[1], bytes[0]],
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::BigEndian => f.write_str("big-endian"),
            Endianness::LittleEndian => f.write_str("little-endian"),
        }
    }
}

impl FromStr for Endianness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "be" | "big" | "big-endian" => Ok(Endianness::BigEndian),
            "le" | "little" | "little-endian" => Ok(Endianness::LittleEndian),
            _ => Err(Error::UnsupportedEndianness(s.to_owned())),
        }
    }
}

impl TryFrom<u8> for Endianness {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            _ => Err(Error::UnsupportedEndianness(tag.to_string())),
        }
    }
}

/// A UTF-16 or UTF-32 code unit.
///
/// A unit's in-memory image (`to_ne_bytes`) carries the encoded bytes in
/// some declared byte order. [`CodeUnit::read`] recovers the value the unit
/// stands for under that order and [`CodeUnit::write`] lays a value out the
/// same way, so a `&[u32]` behaves exactly like the raw buffer it came from
/// on any host.
pub trait CodeUnit: Copy + Eq + Into<u32> {
    /// Width in bytes.
    const WIDTH: usize;
    /// Byte image of U+FEFF in big-endian order.
    const BE_BOM: &'static [u8];
    /// Byte image of U+FEFF in little-endian order.
    const LE_BOM: &'static [u8];

    fn read(self, endianness: Endianness) -> Self;
    fn write(value: Self, endianness: Endianness) -> Self;
    /// Assembles a value from exactly `WIDTH` bytes laid out in `endianness`.
    fn from_bytes(bytes: &[u8], endianness: Endianness) -> Self;
}

impl CodeUnit for u16 {
    const WIDTH: usize = 2;
    const BE_BOM: &'static [u8] = &[0xFE, 0xFF];
    const LE_BOM: &'static [u8] = &[0xFF, 0xFE];

    #[inline]
    fn read(self, endianness: Endianness) -> Self {
        endianness.u16_from_bytes(self.to_ne_bytes())
    }

    #[inline]
    fn write(value: Self, endianness: Endianness) -> Self {
        match endianness {
            Endianness::BigEndian => u16::from_ne_bytes(value.to_be_bytes()),
            Endianness::LittleEndian => u16::from_ne_bytes(value.to_le_bytes()),
        }
    }

    #[inline]
    fn from_bytes(bytes: &[u8], endianness: Endianness) -> Self {
        endianness.u16_from_bytes([bytes[0], bytes[1]])
    }
}

impl CodeUnit for u32 {
    const WIDTH: usize = 4;
    const BE_BOM: &'static [u8] = &[0x00, 0x00, 0xFE, 0xFF];
    const LE_BOM: &'static [u8] = &[0xFF, 0xFE, 0x00, 0x00];

    #[inline]
    fn read(self, endianness: Endianness) -> Self {
        endianness.u32_from_bytes(self.to_ne_bytes())
    }

    #[inline]
    fn write(value: Self, endianness: Endianness) -> Self {
        u32::from_ne_bytes(endianness.u32_to_bytes(value))
    }

    #[inline]
    fn from_bytes(bytes: &[u8], endianness: Endianness) -> Self {
        endianness.u32_from_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}
