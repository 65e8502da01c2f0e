use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;
use super::errors::RoleTypeError;

/// Issuer written into every token unless overridden.
pub const DEFAULT_ISSUER: &str = "supabase";

/// Token lifetime: ten 365-day years, in seconds. Leap days are not counted.
pub const TEN_YEARS_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// Role selector accepted from callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleType {
    Anon,
    Service,
}

impl RoleType {
    /// Role claim granted to this selector.
    pub fn role(self) -> Role {
        match self {
            RoleType::Anon => Role::Anon,
            RoleType::Service => Role::ServiceRole,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoleType::Anon => "anon",
            RoleType::Service => "service",
        }
    }
}

impl FromStr for RoleType {
    type Err = RoleTypeError;

    /// Parse a selector. Only the exact strings `anon` and `service` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anon" => Ok(RoleType::Anon),
            "service" => Ok(RoleType::Service),
            other => Err(RoleTypeError::Invalid(other.to_string())),
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the `role` claim.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Anon,
    ServiceRole,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Anon => "anon",
            Role::ServiceRole => "service_role",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API key claims.
///
/// Field order is the serialized key order: `role`, `iss`, `iat`, `exp`.
/// Do not reorder the fields; the encoded payload depends on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Role granted to the bearer
    pub role: Role,

    /// Issuer
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims issued at `issued_at` with the default issuer and lifetime.
    ///
    /// # Arguments
    /// * `role` - Role claim
    /// * `issued_at` - Unix seconds
    ///
    /// # Returns
    /// Claims expiring ten years after `issued_at`
    ///
    /// # Errors
    /// * `ExpiryOverflow` - `issued_at` is too close to `i64::MAX`
    pub fn new(role: Role, issued_at: i64) -> Result<Self, JwtError> {
        Ok(Self {
            role,
            iss: DEFAULT_ISSUER.to_string(),
            iat: issued_at,
            exp: expiry(issued_at, TEN_YEARS_SECONDS)?,
        })
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl ToString) -> Self {
        self.iss = iss.to_string();
        self
    }

    /// Set lifetime in seconds, recomputing `exp` from `iat`.
    ///
    /// # Errors
    /// * `ExpiryOverflow` - `iat + ttl_seconds` does not fit in an `i64`
    pub fn with_ttl(mut self, ttl_seconds: i64) -> Result<Self, JwtError> {
        self.exp = expiry(self.iat, ttl_seconds)?;
        Ok(self)
    }

    /// Seconds between issue and expiry.
    pub fn lifetime(&self) -> i64 {
        self.exp - self.iat
    }
}

fn expiry(iat: i64, ttl_seconds: i64) -> Result<i64, JwtError> {
    iat.checked_add(ttl_seconds)
        .ok_or(JwtError::ExpiryOverflow { iat, ttl_seconds })
}
