//! Supabase API key signing library
//!
//! Issues the long-lived HS256 JWTs a Supabase project uses as its `anon` and
//! `service_role` API keys:
//! - Compact segment encoding (JSON + URL-safe base64, no padding)
//! - HMAC-SHA256 signing
//! - Role and claim resolution with an injectable clock
//!
//! # Examples
//!
//! ## Issuing a key
//! ```
//! use auth::{FixedClock, RoleType, TokenIssuer};
//!
//! let issuer = TokenIssuer::new(b"testsecret", FixedClock(1_700_000_000)).unwrap();
//! let token = issuer.issue(RoleType::Anon).unwrap();
//! assert_eq!(token.split('.').count(), 3);
//! ```
//!
//! ## Signing arbitrary records
//! ```
//! use auth::{Claims, Header, JwtSigner, Role};
//!
//! let signer = JwtSigner::new(b"testsecret").unwrap();
//! let claims = Claims::new(Role::ServiceRole, 1_700_000_000).unwrap();
//! let token = signer.sign(&Header::hs256(), &claims).unwrap();
//! assert!(token.starts_with("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9."));
//! ```

pub mod clock;
pub mod issuer;
pub mod jwt;

// Re-export commonly used items
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use issuer::TokenIssuer;
pub use jwt::Claims;
pub use jwt::Header;
pub use jwt::JwtError;
pub use jwt::JwtSigner;
pub use jwt::Role;
pub use jwt::RoleType;
pub use jwt::RoleTypeError;
