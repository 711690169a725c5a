//! # cpf-core
//!
//! Shared configuration for the CPF authentication gateway.
//!
//! Configuration is read from the environment exactly once at startup and
//! passed to the rest of the system as plain structs; nothing outside this
//! crate touches environment variables.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;

pub use config::{CognitoConfig, Config, ServerConfig};
