//! End-to-end integration tests.
//!
//! Each test runs the gateway on an ephemeral port and drives it over HTTP.
//! The Cognito API is stubbed by an in-process server speaking the same
//! `amz-json-1.1` shapes, so the real provider client is exercised without
//! leaving the process.

mod common;
