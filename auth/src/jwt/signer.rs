use std::fmt;

use hmac::Hmac;
use hmac::Mac;
use serde::Serialize;
use sha2::Sha256;

use super::encoding::base64url;
use super::encoding::encode_segment;
use super::errors::JwtError;

type HmacSha256 = Hmac<Sha256>;

/// HS256 compact token signer.
///
/// Holds the HMAC key for its own lifetime only. The key never appears in
/// `Debug` output.
#[derive(Clone)]
pub struct JwtSigner {
    secret: Vec<u8>,
}

impl JwtSigner {
    /// Create a signer from raw key bytes.
    ///
    /// # Arguments
    /// * `secret` - HMAC key, typically the bytes of the project's JWT secret
    ///
    /// # Errors
    /// * `InvalidKey` - The secret is empty
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::InvalidKey);
        }

        Ok(Self {
            secret: secret.to_vec(),
        })
    }

    /// Sign a header and payload into a compact token.
    ///
    /// # Returns
    /// `header.payload.signature`, each segment URL-safe base64 without padding
    ///
    /// # Errors
    /// * `EncodingFailed` - Header or payload could not be serialized
    pub fn sign<H, P>(&self, header: &H, payload: &P) -> Result<String, JwtError>
    where
        H: Serialize + ?Sized,
        P: Serialize + ?Sized,
    {
        let header_segment = encode_segment(header)?;
        let payload_segment = encode_segment(payload)?;
        let signing_input = format!("{}.{}", header_segment, payload_segment);
        let signature = self.signature(&signing_input)?;

        Ok(format!("{}.{}", signing_input, signature))
    }

    /// Encoded HMAC-SHA256 of an already assembled `header.payload` string.
    pub fn signature(&self, signing_input: &str) -> Result<String, JwtError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret).map_err(|_| JwtError::InvalidKey)?;
        mac.update(signing_input.as_bytes());

        Ok(base64url(mac.finalize().into_bytes()))
    }
}

impl fmt::Debug for JwtSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}
