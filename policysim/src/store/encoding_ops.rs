//! text decoding for stored artifacts. artifacts are UTF-8 unless they were
//! produced by older tooling, which wrote the legacy Korean code page (CP949).
//! every read tries UTF-8 first and falls back to CP949 on a decode failure.
use super::StoreError;
use encoding_rs::{Encoding, EUC_KR_INIT, UTF_8_INIT};
use std::path::Path;

/// encoding attempted first on every read
pub static PRIMARY_ENCODING: &Encoding = &UTF_8_INIT;

/// encoding attempted when the primary decode fails. the WHATWG `EUC-KR`
/// decoder is the windows-949 (CP949) superset of EUC-KR.
pub static LEGACY_ENCODING: &Encoding = &EUC_KR_INIT;

const UTF_8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// decodes `bytes` as UTF-8, or as CP949 if they are not valid UTF-8.
/// returns the decoded text along with the encoding that succeeded, or
/// `None` if neither encoding accepts the input.
pub fn decode_with_fallback(bytes: &[u8]) -> Option<(String, &'static Encoding)> {
    let without_bom = bytes.strip_prefix(UTF_8_BOM).unwrap_or(bytes);
    if let Some(text) =
        PRIMARY_ENCODING.decode_without_bom_handling_and_without_replacement(without_bom)
    {
        return Some((text.into_owned(), PRIMARY_ENCODING));
    }
    LEGACY_ENCODING
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| (text.into_owned(), LEGACY_ENCODING))
}

/// reads a file and decodes it with [`decode_with_fallback`].
pub fn read_with_fallback(path: &Path) -> Result<String, StoreError> {
    let location = path.to_string_lossy().to_string();
    let bytes = std::fs::read(path).map_err(|source| StoreError::ReadFailure {
        location: location.clone(),
        source,
    })?;
    let (text, encoding) = decode_with_fallback(&bytes).ok_or_else(|| StoreError::DecodeFailure {
        location: location.clone(),
    })?;
    if encoding != PRIMARY_ENCODING {
        log::warn!(
            "'{location}' is not valid {}, decoded as legacy {}",
            PRIMARY_ENCODING.name(),
            encoding.name()
        );
    }
    Ok(text)
}
