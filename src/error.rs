use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a conversion can fail.
///
/// `index` is the position of the offending element in the input: a unit
/// index for UTF-16 and UTF-32 input, a byte offset for UTF-8 input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("unsupported endianness `{0}`")]
    UnsupportedEndianness(String),
    #[error("invalid codepoint {value:#X} at index {index}")]
    InvalidCodepoint { index: usize, value: u32 },
    #[error("truncated {expected}-byte sequence at byte {index}")]
    TruncatedSequence { index: usize, expected: usize },
    #[error("lead surrogate {lead:#06X} at index {index} has no trail unit")]
    TruncatedSurrogatePair { index: usize, lead: u16 },
    #[error("lead surrogate at index {index} followed by non-trail unit {unit:#06X}")]
    InvalidSurrogatePair { index: usize, unit: u16 },
    #[error("invalid lead byte {byte:#04X} at byte {index}")]
    InvalidLeadByte { index: usize, byte: u8 },
    #[error("first unit {unit:#X} is not a byte-order mark")]
    UnrecognizedBom { unit: u32 },
    #[error("buffer tagged with a byte-order mark is empty")]
    EmptyBomBuffer,
    #[error("{len} bytes do not divide into {width}-byte units")]
    TruncatedUnit { len: usize, width: usize },
    #[error("invalid continuation byte {byte:#04X} at byte {index}")]
    InvalidContinuationByte { index: usize, byte: u8 },
    #[error("overlong encoding of {value:#X} at byte {index}")]
    OverlongEncoding { index: usize, value: u32 },
    #[error("surrogate codepoint {value:#X} at index {index}")]
    SurrogateCodepoint { index: usize, value: u32 },
    #[error("unpaired trail surrogate {unit:#06X} at index {index}")]
    UnpairedSurrogate { index: usize, unit: u16 },
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidCodepoint {
                index: 3,
                value: 0x110000
            }
            .to_string(),
            "invalid codepoint 0x110000 at index 3"
        );
        assert_eq!(
            Error::InvalidLeadByte {
                index: 0,
                byte: 0x80
            }
            .to_string(),
            "invalid lead byte 0x80 at byte 0"
        );
        assert_eq!(
            Error::TruncatedSurrogatePair {
                index: 1,
                lead: 0xD83D
            }
            .to_string(),
            "lead surrogate 0xD83D at index 1 has no trail unit"
        );
    }
}
