use log::{debug, trace};

use crate::bom::{bom_bytes, bom_for, strip_bom, strip_bom_bytes};
use crate::decode::utf8_to_utf32;
use crate::encode::{utf16_to_utf8, utf32_to_utf8};
use crate::error::{Error, Result};
use crate::utf::{CodeUnit, Endianness};

/// How much checking the conversions perform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Validation {
    /// Accepts surrogate codepoints in UTF-32 input, lone trail surrogates in
    /// UTF-16 input, and UTF-8 with unmarked continuation bytes, overlong
    /// forms or out-of-range results.
    #[default]
    Permissive,
    /// Only well-formed input in every encoding form.
    Strict,
}

impl Validation {
    #[inline]
    pub const fn is_strict(self) -> bool {
        matches!(self, Validation::Strict)
    }
}

/// Entry point for every conversion, carrying the validation policy.
///
/// On failure the output is never observable: functions returning a `Vec`
/// return only the error, and `_into` functions leave `target` empty.
///
/// ```
/// use utf_convert::{Converter, Endianness};
///
/// let converter = Converter::strict();
/// let units = converter.decode_u8_to_u32("é".as_bytes(), Endianness::native(), false)?;
/// assert_eq!(units, [0xE9]);
/// # Ok::<(), utf_convert::Error>(())
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Converter {
    validation: Validation,
}

impl Converter {
    pub const fn new() -> Self {
        Self {
            validation: Validation::Permissive,
        }
    }

    pub const fn strict() -> Self {
        Self {
            validation: Validation::Strict,
        }
    }

    pub const fn with_validation(self, validation: Validation) -> Self {
        Self { validation }
    }

    pub const fn validation(&self) -> Validation {
        self.validation
    }

    /// UTF-32 units, laid out in `endianness`, to UTF-8. No BOM is expected.
    pub fn encode_u32_to_u8(&self, units: &[u32], endianness: Endianness) -> Result<Vec<u8>> {
        let mut target = Vec::with_capacity(units.len());
        self.encode_u32_to_u8_into(units, endianness, &mut target)?;
        Ok(target)
    }

    pub fn encode_u32_to_u8_into(
        &self,
        units: &[u32],
        endianness: Endianness,
        target: &mut Vec<u8>,
    ) -> Result<()> {
        trace!("utf-32 -> utf-8: {} units, {endianness}", units.len());
        target.clear();
        let values = units.iter().map(|unit| unit.read(endianness));
        settle(utf32_to_utf8(values, self.validation, target), target)
    }

    /// UTF-32 units led by a BOM to UTF-8, in the byte order the BOM names.
    pub fn encode_u32_to_u8_with_bom(&self, units: &[u32]) -> Result<Vec<u8>> {
        let mut target = Vec::with_capacity(units.len());
        self.encode_u32_to_u8_with_bom_into(units, &mut target)?;
        Ok(target)
    }

    pub fn encode_u32_to_u8_with_bom_into(&self, units: &[u32], target: &mut Vec<u8>) -> Result<()> {
        target.clear();
        let (endianness, units) = strip_bom(units).inspect_err(log_failure)?;
        self.encode_u32_to_u8_into(units, endianness, target)
    }

    /// UTF-16 units, laid out in `endianness`, to UTF-8. No BOM is expected.
    pub fn encode_u16_to_u8(&self, units: &[u16], endianness: Endianness) -> Result<Vec<u8>> {
        let mut target = Vec::with_capacity(units.len());
        self.encode_u16_to_u8_into(units, endianness, &mut target)?;
        Ok(target)
    }

    pub fn encode_u16_to_u8_into(
        &self,
        units: &[u16],
        endianness: Endianness,
        target: &mut Vec<u8>,
    ) -> Result<()> {
        trace!("utf-16 -> utf-8: {} units, {endianness}", units.len());
        target.clear();
        let values = units.iter().map(|unit| unit.read(endianness));
        settle(utf16_to_utf8(values, self.validation, target), target)
    }

    /// UTF-16 units led by a BOM to UTF-8, in the byte order the BOM names.
    pub fn encode_u16_to_u8_with_bom(&self, units: &[u16]) -> Result<Vec<u8>> {
        let mut target = Vec::with_capacity(units.len());
        self.encode_u16_to_u8_with_bom_into(units, &mut target)?;
        Ok(target)
    }

    pub fn encode_u16_to_u8_with_bom_into(&self, units: &[u16], target: &mut Vec<u8>) -> Result<()> {
        target.clear();
        let (endianness, units) = strip_bom(units).inspect_err(log_failure)?;
        self.encode_u16_to_u8_into(units, endianness, target)
    }

    /// UTF-8 to UTF-32 units laid out in `endianness`, optionally led by the
    /// BOM of that order.
    pub fn decode_u8_to_u32(
        &self,
        bytes: &[u8],
        endianness: Endianness,
        add_bom: bool,
    ) -> Result<Vec<u32>> {
        let mut target = Vec::with_capacity(bytes.len() + add_bom as usize);
        self.decode_u8_to_u32_into(bytes, endianness, add_bom, &mut target)?;
        Ok(target)
    }

    pub fn decode_u8_to_u32_into(
        &self,
        bytes: &[u8],
        endianness: Endianness,
        add_bom: bool,
        target: &mut Vec<u32>,
    ) -> Result<()> {
        trace!("utf-8 -> utf-32: {} bytes, {endianness}, bom: {add_bom}", bytes.len());
        target.clear();
        if add_bom {
            target.push(bom_for(endianness));
        }
        let result = utf8_to_utf32(bytes, self.validation, |value| {
            target.push(u32::write(value, endianness))
        });
        settle(result, target)
    }

    /// Raw UTF-32 bytes in `endianness` to UTF-8.
    pub fn encode_utf32_bytes(&self, bytes: &[u8], endianness: Endianness) -> Result<Vec<u8>> {
        trace!("utf-32 bytes -> utf-8: {} bytes, {endianness}", bytes.len());
        let values = units_from_bytes::<u32>(bytes, endianness).inspect_err(log_failure)?;
        let mut target = Vec::with_capacity(bytes.len() / 4);
        utf32_to_utf8(values, self.validation, &mut target).inspect_err(log_failure)?;
        Ok(target)
    }

    /// Raw UTF-32 bytes led by a BOM to UTF-8.
    pub fn encode_utf32_bytes_with_bom(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let (endianness, rest) = strip_bom_bytes::<u32>(bytes).inspect_err(log_failure)?;
        self.encode_utf32_bytes(rest, endianness)
    }

    /// Raw UTF-16 bytes in `endianness` to UTF-8.
    pub fn encode_utf16_bytes(&self, bytes: &[u8], endianness: Endianness) -> Result<Vec<u8>> {
        trace!("utf-16 bytes -> utf-8: {} bytes, {endianness}", bytes.len());
        let values = units_from_bytes::<u16>(bytes, endianness).inspect_err(log_failure)?;
        let mut target = Vec::with_capacity(bytes.len() / 2);
        utf16_to_utf8(values, self.validation, &mut target).inspect_err(log_failure)?;
        Ok(target)
    }

    /// Raw UTF-16 bytes led by a BOM to UTF-8.
    pub fn encode_utf16_bytes_with_bom(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let (endianness, rest) = strip_bom_bytes::<u16>(bytes).inspect_err(log_failure)?;
        self.encode_utf16_bytes(rest, endianness)
    }

    /// UTF-8 to raw UTF-32 bytes in `endianness`, optionally led by the BOM.
    pub fn decode_u8_to_u32_bytes(
        &self,
        bytes: &[u8],
        endianness: Endianness,
        add_bom: bool,
    ) -> Result<Vec<u8>> {
        trace!("utf-8 -> utf-32 bytes: {} bytes, {endianness}, bom: {add_bom}", bytes.len());
        let mut target = Vec::with_capacity((bytes.len() + 1) * 4);
        if add_bom {
            target.extend_from_slice(bom_bytes::<u32>(endianness));
        }
        utf8_to_utf32(bytes, self.validation, |value| {
            target.extend_from_slice(&endianness.u32_to_bytes(value))
        })
        .inspect_err(log_failure)?;
        Ok(target)
    }
}

fn units_from_bytes<U: CodeUnit>(
    bytes: &[u8],
    endianness: Endianness,
) -> Result<impl Iterator<Item = U> + '_> {
    if bytes.len() % U::WIDTH != 0 {
        return Err(Error::TruncatedUnit {
            len: bytes.len(),
            width: U::WIDTH,
        });
    }
    Ok(bytes
        .chunks_exact(U::WIDTH)
        .map(move |chunk| U::from_bytes(chunk, endianness)))
}

fn settle<T>(result: Result<()>, target: &mut Vec<T>) -> Result<()> {
    if let Err(error) = &result {
        log_failure(error);
        target.clear();
    }
    result
}

fn log_failure(error: &Error) {
    debug!("conversion failed: {error}");
}
