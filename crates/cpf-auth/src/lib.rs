//! # cpf-auth
//!
//! The two pure pieces of the authentication gateway:
//!
//! - [`cpf`]: structural and check-digit validation of CPF numbers
//! - [`secret_hash`]: derivation of the per-username `SECRET_HASH` the
//!   identity provider requires from confidential clients
//!
//! Both modules are deterministic and perform no I/O, so they can be tested
//! exhaustively without any environment.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod cpf;
pub mod secret_hash;
