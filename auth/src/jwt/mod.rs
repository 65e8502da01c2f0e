pub mod claims;
pub mod encoding;
pub mod errors;
pub mod header;
pub mod signer;

pub use claims::Claims;
pub use claims::Role;
pub use claims::RoleType;
pub use errors::JwtError;
pub use errors::RoleTypeError;
pub use header::Header;
pub use signer::JwtSigner;
