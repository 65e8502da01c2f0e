use crate::clock::Clock;
use crate::jwt::claims::DEFAULT_ISSUER;
use crate::jwt::claims::TEN_YEARS_SECONDS;
use crate::jwt::Claims;
use crate::jwt::Header;
use crate::jwt::JwtError;
use crate::jwt::JwtSigner;
use crate::jwt::RoleType;

/// Issues role API keys.
///
/// Coordinates role resolution, claim construction from the clock, and
/// HS256 signing. Holds no mutable state, so one issuer can serve any number
/// of calls.
#[derive(Debug, Clone)]
pub struct TokenIssuer<C> {
    signer: JwtSigner,
    clock: C,
    issuer: String,
    ttl_seconds: i64,
}

impl<C: Clock> TokenIssuer<C> {
    /// Create an issuer with the default `iss` and ten-year lifetime.
    ///
    /// # Arguments
    /// * `secret` - HMAC key bytes
    /// * `clock` - Time source for `iat`
    ///
    /// # Errors
    /// * `InvalidKey` - The secret is empty
    pub fn new(secret: &[u8], clock: C) -> Result<Self, JwtError> {
        Ok(Self {
            signer: JwtSigner::new(secret)?,
            clock,
            issuer: DEFAULT_ISSUER.to_string(),
            ttl_seconds: TEN_YEARS_SECONDS,
        })
    }

    /// Set the `iss` claim.
    pub fn with_issuer(mut self, issuer: impl ToString) -> Self {
        self.issuer = issuer.to_string();
        self
    }

    /// Set the token lifetime in seconds.
    pub fn with_ttl(mut self, ttl_seconds: i64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    /// Build the claims for a role, issued now.
    ///
    /// # Errors
    /// * `ExpiryOverflow` - The configured lifetime pushes `exp` past `i64::MAX`
    pub fn claims_for(&self, role_type: RoleType) -> Result<Claims, JwtError> {
        Claims::new(role_type.role(), self.clock.now())?
            .with_issuer(&self.issuer)
            .with_ttl(self.ttl_seconds)
    }

    /// Issue a signed token for a role.
    ///
    /// # Errors
    /// * `ExpiryOverflow` - The configured lifetime pushes `exp` past `i64::MAX`
    /// * `EncodingFailed` - Header or claims could not be serialized
    pub fn issue(&self, role_type: RoleType) -> Result<String, JwtError> {
        let claims = self.claims_for(role_type)?;
        let token = self.signer.sign(&Header::hs256(), &claims)?;

        tracing::debug!(
            role = %claims.role,
            iss = %claims.iss,
            iat = claims.iat,
            exp = claims.exp,
            "Token issued"
        );

        Ok(token)
    }
}
