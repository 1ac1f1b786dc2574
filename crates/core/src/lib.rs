//! Domain logic for the restaurant ordering backend.
//!
//! Everything in this crate is free of I/O except through the
//! [`pricing::MenuCatalog`] seam, so it can be unit tested without a
//! database or HTTP server.

pub mod error;
pub mod phone;
pub mod pricing;
pub mod roles;
pub mod search;
pub mod token;
pub mod types;
