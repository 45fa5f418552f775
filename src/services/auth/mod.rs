pub mod authenticator;
pub mod claims;
pub mod issuer;

pub use authenticator::{AuthError, RequestIdentity, TokenAuthenticator};
pub use issuer::TokenIssuer;
