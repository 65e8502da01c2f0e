use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token segment: {0}")]
    EncodingFailed(String),

    #[error("Invalid signing key: secret must not be empty")]
    InvalidKey,

    #[error("Expiry out of range: iat {iat} + ttl {ttl_seconds} overflows")]
    ExpiryOverflow { iat: i64, ttl_seconds: i64 },
}

/// Error for role selector parsing failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleTypeError {
    #[error("Invalid role type: {0} (expected 'anon' or 'service')")]
    Invalid(String),
}
