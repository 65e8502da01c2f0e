use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Serialize;

use super::errors::JwtError;

/// Encode raw bytes as URL-safe base64 without padding.
///
/// Same output as standard base64 with `+` replaced by `-`, `/` replaced by `_`
/// and every trailing `=` stripped.
pub fn base64url(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Encode a record as a compact token segment.
///
/// The record is serialized to JSON without whitespace. Keys appear in the
/// record's field declaration order, which is part of the segment format:
/// two records with the same fields in a different order produce different
/// segments and therefore different signatures.
///
/// # Errors
/// * `EncodingFailed` - The record's `Serialize` impl rejected serialization
pub fn encode_segment<T: Serialize + ?Sized>(record: &T) -> Result<String, JwtError> {
    let json = serde_json::to_vec(record).map_err(|e| JwtError::EncodingFailed(e.to_string()))?;
    Ok(base64url(json))
}
