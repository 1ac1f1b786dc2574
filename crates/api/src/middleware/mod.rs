//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthAdmin`] -- Any signed-in admin, loaded from the database.
//! - [`rbac::RequireAdmin`] -- Requires `SUPER_ADMIN` or `ADMIN`.
//! - [`rbac::RequireSuperAdmin`] -- Requires `SUPER_ADMIN`.

pub mod auth;
pub mod rbac;
