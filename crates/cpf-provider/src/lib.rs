//! # cpf-provider
//!
//! Capability interface for the external identity provider.
//!
//! The gateway's own logic (CPF validation, hash derivation, response
//! mapping) never depends on a concrete provider; it talks to this trait.
//! Production wires in the Cognito implementation, tests substitute
//! in-process doubles.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod provider;

pub use error::{ProviderError, ProviderResult};
pub use provider::{AuthRequest, AuthTokens, IdentityProvider};
