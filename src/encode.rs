//! UTF-32 and UTF-16 to UTF-8 encoding loops.
//!
//! Both loops take unit values whose byte order is already resolved and
//! append to `target`, stopping at the first bad element. Callers own the
//! decision of what to do with `target` on failure.

use crate::converter::Validation;
use crate::error::{Error, Result};
use crate::utf::{
    is_surrogate, utf16sequence::Utf16Sequence, utf8sequence::Utf8Sequence, Utf,
};

pub(crate) fn utf32_to_utf8<I>(values: I, validation: Validation, target: &mut Vec<u8>) -> Result<()>
where
    I: IntoIterator<Item = u32>,
{
    for (index, value) in values.into_iter().enumerate() {
        if validation.is_strict() && is_surrogate(value) {
            return Err(Error::SurrogateCodepoint { index, value });
        }
        let sequence =
            Utf8Sequence::from_codepoint(value).ok_or(Error::InvalidCodepoint { index, value })?;
        target.extend_from_slice(sequence.as_bytes());
    }
    Ok(())
}

pub(crate) fn utf16_to_utf8<I>(units: I, validation: Validation, target: &mut Vec<u8>) -> Result<()>
where
    I: IntoIterator<Item = u16>,
{
    let mut units = units.into_iter().enumerate();
    while let Some((index, unit)) = units.next() {
        let mut sequence = Utf16Sequence::new(unit);
        if sequence.is_surrogate() {
            let (_, trail) = units
                .next()
                .ok_or(Error::TruncatedSurrogatePair { index, lead: unit })?;
            if !sequence.add_point(trail) {
                return Err(Error::InvalidSurrogatePair { index, unit: trail });
            }
        } else if validation.is_strict() && Utf16Sequence::is_trail(unit) {
            return Err(Error::UnpairedSurrogate { index, unit });
        }
        // Pairs top out at U+10FFFF.
        let value = sequence.get_codepoint();
        let encoded =
            Utf8Sequence::from_codepoint(value).ok_or(Error::InvalidCodepoint { index, value })?;
        target.extend_from_slice(encoded.as_bytes());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf32(values: &[u32], validation: Validation) -> Result<Vec<u8>> {
        let mut target = Vec::new();
        utf32_to_utf8(values.iter().copied(), validation, &mut target).map(|()| target)
    }

    fn utf16(units: &[u16], validation: Validation) -> Result<Vec<u8>> {
        let mut target = Vec::new();
        utf16_to_utf8(units.iter().copied(), validation, &mut target).map(|()| target)
    }

    #[test]
    fn utf32_mixed_lengths() {
        assert_eq!(
            utf32(&[0x41, 0xE9, 0x20AC, 0x1F600], Validation::Permissive).unwrap(),
            "Aé€😀".as_bytes()
        );
    }

    #[test]
    fn utf32_out_of_range() {
        assert_eq!(
            utf32(&[0x41, 0x110000], Validation::Permissive),
            Err(Error::InvalidCodepoint {
                index: 1,
                value: 0x110000
            })
        );
    }

    #[test]
    fn utf32_keeps_prefix_on_failure() {
        let mut target = Vec::new();
        let result = utf32_to_utf8([0x41, 0x42, u32::MAX], Validation::Permissive, &mut target);
        assert!(result.is_err());
        assert_eq!(target, b"AB");
    }

    #[test]
    fn utf32_surrogates() {
        assert_eq!(
            utf32(&[0xD800], Validation::Permissive).unwrap(),
            [0xED, 0xA0, 0x80]
        );
        assert_eq!(
            utf32(&[0x41, 0xDFFF], Validation::Strict),
            Err(Error::SurrogateCodepoint {
                index: 1,
                value: 0xDFFF
            })
        );
    }

    #[test]
    fn utf16_pairs() {
        assert_eq!(
            utf16(&[0x0041, 0xD83D, 0xDE00, 0x00E9], Validation::Strict).unwrap(),
            "A😀é".as_bytes()
        );
    }

    #[test]
    fn utf16_truncated_pair() {
        assert_eq!(
            utf16(&[0x0041, 0xD83D], Validation::Permissive),
            Err(Error::TruncatedSurrogatePair {
                index: 1,
                lead: 0xD83D
            })
        );
    }

    #[test]
    fn utf16_invalid_pair() {
        assert_eq!(
            utf16(&[0xD83D, 0x0041], Validation::Permissive),
            Err(Error::InvalidSurrogatePair {
                index: 0,
                unit: 0x0041
            })
        );
        assert_eq!(
            utf16(&[0xD83D, 0xE000], Validation::Permissive),
            Err(Error::InvalidSurrogatePair {
                index: 0,
                unit: 0xE000
            })
        );
    }

    #[test]
    fn utf16_lone_trail() {
        assert_eq!(
            utf16(&[0xDC00], Validation::Permissive).unwrap(),
            [0xED, 0xB0, 0x80]
        );
        assert_eq!(
            utf16(&[0x0041, 0xDC00], Validation::Strict),
            Err(Error::UnpairedSurrogate {
                index: 1,
                unit: 0xDC00
            })
        );
    }
}
