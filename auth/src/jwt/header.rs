use serde::Deserialize;
use serde::Serialize;

/// JOSE header of an HS256 compact token.
///
/// Serializes as `{"alg":"HS256","typ":"JWT"}`, in that key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    pub alg: String,
    pub typ: String,
}

impl Header {
    /// Header for HMAC-SHA256 signed JWTs.
    pub fn hs256() -> Self {
        Self {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        }
    }
}
