//! Text decoding for in-file strings.
//!
//! BIN tables store their strings as NUL-padded EUC-KR, and the authoring tool that
//! produced them is known to emit malformed sequences. Field decoding therefore runs
//! through an ordered ladder of recovery strategies; the last rung cannot fail, so a
//! field always decodes to *something*.
//!
//! Whole files outside the table formats are a mix of UTF-8 and UTF-16; those go
//! through [`decode_text`] instead, which never touches EUC-KR.

use encoding_rs::EUC_KR;
use widestring::U16String;

/// Truncate a NUL-padded field at its first NUL byte.
pub(crate) fn nul_truncate(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|byte| *byte == b'\0') {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// Strict EUC-KR decode; `None` when the input holds any invalid sequence.
pub fn decode_legacy(bytes: &[u8]) -> Option<String> {
    EUC_KR
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|decoded| decoded.into_owned())
}

/// Forgiving EUC-KR decode; invalid sequences are dropped from the output.
pub fn decode_legacy_lossy(bytes: &[u8]) -> String {
    let (decoded, _) = EUC_KR.decode_without_bom_handling(bytes);
    drop_replacements(&decoded)
}

/// One rung of the field recovery ladder.
type Strategy = fn(&[u8]) -> Option<String>;

/// Recovery ladder for malformed text fields, tried in order. First success wins.
///
/// The middle rung drops the first two and the last byte of the field, which recovers
/// a shift corruption the authoring tool produces in some item tables. The last rung
/// always succeeds.
const FIELD_STRATEGIES: &[Strategy] = &[
    |bytes| decode_legacy(bytes),
    |bytes| decode_legacy(shifted_window(bytes)),
    |bytes| Some(decode_legacy_lossy(bytes)),
];

fn shifted_window(bytes: &[u8]) -> &[u8] {
    bytes
        .get(2..bytes.len().saturating_sub(1))
        .unwrap_or_default()
}

/// Decode a raw BIN text field: NUL truncation, then the recovery ladder, then a
/// whitespace trim. Never fails.
pub fn decode_text_field(raw: &[u8]) -> String {
    let bytes = nul_truncate(raw);

    FIELD_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(bytes))
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Decode a whole text file: strict UTF-8 first, then UTF-16, then UTF-8 with
/// invalid sequences dropped so some output is always produced.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_owned();
    }

    if let Some(text) = decode_utf16(bytes) {
        return text;
    }

    drop_replacements(&String::from_utf8_lossy(bytes))
}

/// UTF-16 decode honoring a leading BOM, little-endian when there is none. Fails on
/// odd lengths and unpaired surrogates.
fn decode_utf16(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }

    let (data, big_endian) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (rest, false),
        [0xFE, 0xFF, rest @ ..] => (rest, true),
        rest => (rest, false),
    };

    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    U16String::from_vec(units).to_string().ok()
}

fn drop_replacements(text: &str) -> String {
    text.chars()
        .filter(|c| *c != char::REPLACEMENT_CHARACTER)
        .collect()
}
