//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- signing/verification of the access/refresh token pair and
//!   the refresh flow.

pub mod jwt;
pub mod password;
