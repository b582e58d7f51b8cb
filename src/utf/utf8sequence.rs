use crate::utf::*;

/// One UTF-8 encoded codepoint, either being decoded byte by byte or
/// produced from a codepoint.
pub(crate) struct Utf8Sequence {
    bytes: [u8; 4],
    full_length: u8,
    current_length: u8,
}

impl Utf for Utf8Sequence {
    type Point = u8;

    /// Payload bits of the lead byte followed by the low six bits of every
    /// trailing byte. Marker bits of trailing bytes are not checked.
    #[inline]
    fn get_codepoint(&self) -> u32 {
        let mut codepoint = match self.full_length {
            1 => return self.bytes[0] as u32,
            2 => self.bytes[0] & 0b0001_1111,
            3 => self.bytes[0] & 0b0000_1111,
            _ => self.bytes[0] & 0b0000_0111,
        } as u32;
        for i in 1..self.full_len() {
            codepoint = (codepoint << 6) | (self.bytes[i] & 0b0011_1111) as u32;
        }
        codepoint
    }

    #[inline]
    fn add_point(&mut self, point: Self::Point) -> bool {
        if self.is_complete() {
            return false;
        }
        self.bytes[self.current_len()] = point;
        self.current_length += 1;
        true
    }

    #[inline]
    fn is_complete(&self) -> bool {
        self.current_length == self.full_length
    }
}

impl Utf8Sequence {
    /// Starts a sequence from its lead byte, most specific pattern first.
    /// Only a bare continuation byte `10xxxxxx` is refused.
    #[inline]
    pub const fn build(byte: u8) -> Option<Self> {
        let full_length = if byte & 0xF0 == 0xF0 {
            4
        } else if byte & 0xE0 == 0xE0 {
            3
        } else if byte & 0xC0 == 0xC0 {
            2
        } else if byte & 0x80 == 0 {
            1
        } else {
            return None;
        };
        Some(Self {
            bytes: [byte, 0, 0, 0],
            full_length,
            current_length: 1,
        })
    }

    /// Minimal encoding of `codepoint`, or `None` above U+10FFFF.
    #[inline]
    pub const fn from_codepoint(codepoint: u32) -> Option<Self> {
        let (bytes, full_length) = match codepoint {
            0..=0x7F => ([codepoint as u8, 0, 0, 0], 1),
            0x80..=0x7FF => (
                [
                    (codepoint >> 6) as u8 & 0x1F | 0xC0,
                    codepoint as u8 & 0x3F | 0x80,
                    0,
                    0,
                ],
                2,
            ),
            0x800..=0xFFFF => (
                [
                    (codepoint >> 12) as u8 & 0x0F | 0xE0,
                    (codepoint >> 6) as u8 & 0x3F | 0x80,
                    codepoint as u8 & 0x3F | 0x80,
                    0,
                ],
                3,
            ),
            0x10000..=0x10FFFF => (
                [
                    (codepoint >> 18) as u8 & 0x07 | 0xF0,
                    (codepoint >> 12) as u8 & 0x3F | 0x80,
                    (codepoint >> 6) as u8 & 0x3F | 0x80,
                    codepoint as u8 & 0x3F | 0x80,
                ],
                4,
            ),
            _ => return None,
        };
        Some(Self {
            bytes,
            full_length,
            current_length: full_length,
        })
    }

    /// Number of bytes the minimal encoding of `codepoint` takes.
    pub const fn encoded_len(codepoint: u32) -> usize {
        match codepoint {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xFFFF => 3,
            _ => 4,
        }
    }

    /// Lead bytes no well-formed sequence can start with.
    pub const fn is_invalid(byte: u8) -> bool {
        matches!(byte, 0xC0 | 0xC1 | 0xF5..)
    }

    pub const fn is_continuation(byte: u8) -> bool {
        byte & 0xC0 == 0x80
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.current_len()]
    }

    pub const fn current_len(&self) -> usize {
        self.current_length as usize
    }

    pub const fn full_len(&self) -> usize {
        self.full_length as usize
    }
}
