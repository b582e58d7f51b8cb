use crate::utf::*;

/// One codepoint assembled from UTF-16 units whose byte order has already
/// been resolved.
#[derive(Clone, Copy)]
pub(crate) struct Utf16Sequence {
    units: [u16; 2],
    is_surrogate: bool,
    is_complete: bool,
}

impl Utf for Utf16Sequence {
    type Point = u16;

    #[inline]
    fn get_codepoint(&self) -> u32 {
        let high = self.units[0] as u32;
        if self.is_surrogate {
            let low = self.units[1] as u32;
            ((high - 0xD800) << 10) + (low - 0xDC00) + 0x10000
        } else {
            high
        }
    }

    /// Accepts the trail half of a pair. Refused when the sequence does not
    /// start with a lead surrogate, is already paired, or `point` is not a
    /// trail surrogate.
    #[inline]
    fn add_point(&mut self, point: Self::Point) -> bool {
        if !self.is_surrogate || self.is_complete || !Self::is_trail(point) {
            return false;
        }
        self.units[1] = point;
        self.is_complete = true;
        true
    }

    #[inline]
    fn is_complete(&self) -> bool {
        self.is_complete
    }
}

impl Utf16Sequence {
    #[inline]
    pub const fn new(unit: u16) -> Self {
        let is_surrogate = Self::is_lead(unit);
        Self {
            units: [unit, 0],
            is_surrogate,
            is_complete: !is_surrogate,
        }
    }

    pub const fn is_lead(unit: u16) -> bool {
        matches!(unit, 0xD800..=0xDBFF)
    }

    pub const fn is_trail(unit: u16) -> bool {
        matches!(unit, 0xDC00..=0xDFFF)
    }

    pub const fn is_surrogate(&self) -> bool {
        self.is_surrogate
    }
}
