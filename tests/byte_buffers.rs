use itertools::iproduct;
use utf_convert::{bom, Converter, Endianness, Error, Validation};

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

const WORD: &str = "gªrçon 😀";
const ORDERS: [Endianness; 2] = [Endianness::BigEndian, Endianness::LittleEndian];
const VALIDATIONS: [Validation; 2] = [Validation::Permissive, Validation::Strict];

fn utf16_bytes(text: &str, endianness: Endianness) -> Vec<u8> {
    text.encode_utf16()
        .flat_map(|unit| match endianness {
            Endianness::BigEndian => unit.to_be_bytes(),
            Endianness::LittleEndian => unit.to_le_bytes(),
        })
        .collect()
}

fn utf32_bytes(text: &str, endianness: Endianness) -> Vec<u8> {
    text.chars()
        .flat_map(|c| endianness.u32_to_bytes(c.into()))
        .collect()
}

#[test]
fn utf32_bytes_to_utf8() {
    for (endianness, validation) in iproduct!(ORDERS, VALIDATIONS) {
        let converter = Converter::new().with_validation(validation);
        let utf8 = converter
            .encode_utf32_bytes(&utf32_bytes(WORD, endianness), endianness)
            .expect(here!());
        assert_eq!(utf8, WORD.as_bytes());
    }
}

#[test]
fn utf16_bytes_to_utf8() {
    for (endianness, validation) in iproduct!(ORDERS, VALIDATIONS) {
        let converter = Converter::new().with_validation(validation);
        let utf8 = converter
            .encode_utf16_bytes(&utf16_bytes(WORD, endianness), endianness)
            .expect(here!());
        assert_eq!(utf8, WORD.as_bytes());
    }
}

#[test]
fn bom_led_bytes() {
    for endianness in ORDERS {
        let mut utf32 = bom::bom_bytes::<u32>(endianness).to_vec();
        utf32.extend(utf32_bytes(WORD, endianness));
        assert_eq!(
            Converter::new().encode_utf32_bytes_with_bom(&utf32).expect(here!()),
            WORD.as_bytes()
        );

        let mut utf16 = bom::bom_bytes::<u16>(endianness).to_vec();
        utf16.extend(utf16_bytes(WORD, endianness));
        assert_eq!(
            Converter::new().encode_utf16_bytes_with_bom(&utf16).expect(here!()),
            WORD.as_bytes()
        );
    }
    assert_eq!(
        Converter::new().encode_utf16_bytes_with_bom(&[]),
        Err(Error::EmptyBomBuffer)
    );
    assert_eq!(
        Converter::new().encode_utf32_bytes_with_bom(&[0x00, 0x00, 0x00, 0x41]),
        Err(Error::UnrecognizedBom { unit: 0x41 })
    );
}

#[test]
fn decode_to_bytes() {
    for (endianness, add_bom) in iproduct!(ORDERS, [false, true]) {
        let bytes = Converter::strict()
            .decode_u8_to_u32_bytes(WORD.as_bytes(), endianness, add_bom)
            .expect(here!());
        let mut expected = Vec::new();
        if add_bom {
            expected.extend_from_slice(bom::bom_bytes::<u32>(endianness));
        }
        expected.extend(utf32_bytes(WORD, endianness));
        assert_eq!(bytes, expected);
    }
}

#[test]
fn decode_then_encode_reproduces_input() {
    for (endianness, validation) in iproduct!(ORDERS, VALIDATIONS) {
        let converter = Converter::new().with_validation(validation);
        let units = converter
            .decode_u8_to_u32(WORD.as_bytes(), endianness, true)
            .expect(here!());
        assert_eq!(
            converter.encode_u32_to_u8_with_bom(&units).expect(here!()),
            WORD.as_bytes()
        );
        assert_eq!(
            converter
                .encode_u32_to_u8(&units[1..], endianness)
                .expect(here!()),
            WORD.as_bytes()
        );
    }
}

#[test]
fn strict_rejects_what_permissive_passes() {
    let lone_trail = utf16_bytes("a", Endianness::BigEndian)
        .into_iter()
        .chain([0xDC, 0x00])
        .collect::<Vec<_>>();
    assert_eq!(
        Converter::new()
            .encode_utf16_bytes(&lone_trail, Endianness::BigEndian)
            .expect(here!()),
        [0x61, 0xED, 0xB0, 0x80]
    );
    assert_eq!(
        Converter::strict().encode_utf16_bytes(&lone_trail, Endianness::BigEndian),
        Err(Error::UnpairedSurrogate {
            index: 1,
            unit: 0xDC00
        })
    );

    let overlong = [0xC0, 0x80];
    assert_eq!(
        Converter::new()
            .decode_u8_to_u32(&overlong, Endianness::native(), false)
            .expect(here!()),
        [0]
    );
    assert_eq!(
        Converter::strict().decode_u8_to_u32(&overlong, Endianness::native(), false),
        Err(Error::InvalidLeadByte {
            index: 0,
            byte: 0xC0
        })
    );
}

#[test]
fn truncated_units() {
    let mut bytes = utf32_bytes(WORD, Endianness::LittleEndian);
    bytes.pop();
    assert_eq!(
        Converter::new().encode_utf32_bytes(&bytes, Endianness::LittleEndian),
        Err(Error::TruncatedUnit {
            len: bytes.len(),
            width: 4
        })
    );
}

#[test]
fn parsed_endianness_drives_conversion() {
    let endianness: Endianness = "LE".parse().expect(here!());
    let utf8 = utf_convert::encode_u16_to_u8(&[u16::from_ne_bytes([0x41, 0x00])], endianness)
        .expect(here!());
    assert_eq!(utf8, b"A");
    assert!(matches!(
        "pdp".parse::<Endianness>(),
        Err(Error::UnsupportedEndianness(_))
    ));
}
