//! UTF-8 to UTF-32 decoding loop.

use crate::converter::Validation;
use crate::error::{Error, Result};
use crate::utf::{is_surrogate, utf8sequence::Utf8Sequence, Utf};

/// Decodes `bytes`, handing each codepoint to `emit` in input order.
///
/// In permissive mode trailing bytes are taken as-is: their `10` marker,
/// overlong forms and the range of the result go unchecked. Strict mode
/// rejects all three along with lead bytes that can never start a
/// well-formed sequence.
pub(crate) fn utf8_to_utf32<F>(bytes: &[u8], validation: Validation, mut emit: F) -> Result<()>
where
    F: FnMut(u32),
{
    let strict = validation.is_strict();
    let mut index = 0;
    while index < bytes.len() {
        let lead = bytes[index];
        let mut sequence = match Utf8Sequence::build(lead) {
            Some(sequence) if !(strict && Utf8Sequence::is_invalid(lead)) => sequence,
            _ => return Err(Error::InvalidLeadByte { index, byte: lead }),
        };
        let expected = sequence.full_len();
        let end = index + expected;
        let trailing = bytes
            .get(index + 1..end)
            .ok_or(Error::TruncatedSequence { index, expected })?;
        for (offset, &byte) in trailing.iter().enumerate() {
            if strict && !Utf8Sequence::is_continuation(byte) {
                return Err(Error::InvalidContinuationByte {
                    index: index + 1 + offset,
                    byte,
                });
            }
            sequence.add_point(byte);
        }

        let value = sequence.get_codepoint();
        if strict {
            check_scalar(index, value, expected)?;
        }
        emit(value);
        index = end;
    }
    Ok(())
}

fn check_scalar(index: usize, value: u32, encoded_len: usize) -> Result<()> {
    if value > 0x10FFFF {
        Err(Error::InvalidCodepoint { index, value })
    } else if Utf8Sequence::encoded_len(value) < encoded_len {
        Err(Error::OverlongEncoding { index, value })
    } else if is_surrogate(value) {
        Err(Error::SurrogateCodepoint { index, value })
    } else {
        Ok(())
    }
}
